//! Collision shapes supported by the narrow-phase.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::collision_shape::{CollisionShape, ShapeType};
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::half_edge_mesh::{Face, HalfEdge, HalfEdgeMesh};
pub use self::polyhedral_shape::PolyhedralShape;
pub use self::segment::Segment;
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod collision_shape;
mod convex_polyhedron;
mod half_edge_mesh;
mod polyhedral_shape;
mod segment;
mod support_map;
mod triangle;
