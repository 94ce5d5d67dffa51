use crate::shape::{Ball, Capsule, ConvexPolyhedron, PolyhedralShape, Triangle};

/// The discriminant of a [`CollisionShape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A ball.
    Ball,
    /// A capsule.
    Capsule,
    /// A convex polyhedron.
    ConvexPolyhedron,
    /// A triangle.
    Triangle,
}

/// A shape handled by the narrow-phase.
///
/// The set of supported shapes is closed: pair dispatch happens in the
/// caller (typically right after the broad-phase), not inside the
/// separating-axis drivers, so this is a plain enum rather than an open
/// trait-object hierarchy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum CollisionShape {
    /// A ball.
    Ball(Ball),
    /// A capsule.
    Capsule(Capsule),
    /// A convex polyhedron.
    ConvexPolyhedron(ConvexPolyhedron),
    /// A triangle.
    Triangle(Triangle),
}

impl CollisionShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            CollisionShape::Ball(_) => ShapeType::Ball,
            CollisionShape::Capsule(_) => ShapeType::Capsule,
            CollisionShape::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
            CollisionShape::Triangle(_) => ShapeType::Triangle,
        }
    }

    /// Converts this shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            CollisionShape::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    /// Converts this shape to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            CollisionShape::Capsule(capsule) => Some(capsule),
            _ => None,
        }
    }

    /// Converts this shape to a polyhedral shape, if it is one.
    ///
    /// Both convex polyhedra and triangles qualify.
    pub fn as_polyhedral(&self) -> Option<&dyn PolyhedralShape> {
        match self {
            CollisionShape::ConvexPolyhedron(polyhedron) => Some(polyhedron),
            CollisionShape::Triangle(triangle) => Some(triangle),
            _ => None,
        }
    }
}

impl From<Ball> for CollisionShape {
    fn from(ball: Ball) -> Self {
        CollisionShape::Ball(ball)
    }
}

impl From<Capsule> for CollisionShape {
    fn from(capsule: Capsule) -> Self {
        CollisionShape::Capsule(capsule)
    }
}

impl From<ConvexPolyhedron> for CollisionShape {
    fn from(polyhedron: ConvexPolyhedron) -> Self {
        CollisionShape::ConvexPolyhedron(polyhedron)
    }
}

impl From<Triangle> for CollisionShape {
    fn from(triangle: Triangle) -> Self {
        CollisionShape::Triangle(triangle)
    }
}
