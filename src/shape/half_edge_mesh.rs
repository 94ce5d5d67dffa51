use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::SortedPair;
use na::Unit;
use std::collections::hash_map::{Entry, HashMap};

/// Marks a link that has not been wired yet during construction.
const INVALID: u32 = u32::MAX;

/// A polygonal face of a [`HalfEdgeMesh`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// The face vertex indices, in counter-clockwise order as seen from
    /// outside the mesh.
    pub vertices: Vec<u32>,
    /// One half-edge on the boundary of this face.
    pub first_half_edge: u32,
    /// The outward unit normal of this face.
    pub normal: UnitVector<Real>,
}

/// A directed edge of a [`HalfEdgeMesh`].
///
/// Half-edges are stored in twin-adjacent pairs: for every even index `e`,
/// the half-edges `e` and `e + 1` traverse the same geometric edge in
/// opposite directions. Enumerating geometric edges once is done by stepping
/// the half-edge index by two.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// The vertex this half-edge points away from.
    pub vertex: u32,
    /// The next half-edge around the same face.
    pub next: u32,
    /// The same geometric edge, traversed in the opposite direction.
    pub twin: u32,
    /// The face bordered by this half-edge.
    pub face: u32,
}

/// The half-edge topology of a closed convex polyhedron.
///
/// Vertices, faces, and half-edges are plain arrays linked by `u32` indices,
/// so the cyclic next/twin/face graph involves no owning references and the
/// whole structure is cheap to clone and traverse.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdgeMesh {
    points: Vec<Point<Real>>,
    faces: Vec<Face>,
    half_edges: Vec<HalfEdge>,
    centroid: Point<Real>,
}

impl HalfEdgeMesh {
    /// Builds the half-edge topology of a closed mesh.
    ///
    /// Every face lists its vertex indices in counter-clockwise order as
    /// seen from outside. Returns `None` if a face is degenerate, an index
    /// is out of bounds, or the faces do not form a closed two-manifold
    /// (every edge shared by exactly two faces, traversed once in each
    /// direction).
    pub fn new(points: Vec<Point<Real>>, faces: &[Vec<u32>]) -> Option<Self> {
        if points.is_empty() || faces.is_empty() {
            return None;
        }

        let mut half_edges: Vec<HalfEdge> = Vec::new();
        let mut edge_slots: HashMap<SortedPair<u32>, u32> = HashMap::new();
        let mut face_half_edges: Vec<Vec<u32>> = Vec::with_capacity(faces.len());

        for (fid, face_vertices) in faces.iter().enumerate() {
            if face_vertices.len() < 3 {
                return None;
            }

            let mut edge_ids = Vec::with_capacity(face_vertices.len());

            for i in 0..face_vertices.len() {
                let v1 = face_vertices[i];
                let v2 = face_vertices[(i + 1) % face_vertices.len()];

                if v1 as usize >= points.len() || v2 as usize >= points.len() || v1 == v2 {
                    return None;
                }

                let eid = match edge_slots.entry(SortedPair::new(v1, v2)) {
                    Entry::Vacant(entry) => {
                        // First traversal of this edge: allocate the twin
                        // pair at adjacent indices.
                        let eid = half_edges.len() as u32;
                        half_edges.push(HalfEdge {
                            vertex: v1,
                            next: INVALID,
                            twin: eid + 1,
                            face: fid as u32,
                        });
                        half_edges.push(HalfEdge {
                            vertex: v2,
                            next: INVALID,
                            twin: eid,
                            face: INVALID,
                        });
                        let _ = entry.insert(eid);
                        eid
                    }
                    Entry::Occupied(entry) => {
                        // Second traversal: it must run opposite to the
                        // first one, and the twin slot must still be free.
                        let eid = *entry.get() + 1;
                        let half_edge = &mut half_edges[eid as usize];

                        if half_edge.face != INVALID || half_edge.vertex != v1 {
                            return None;
                        }

                        half_edge.face = fid as u32;
                        eid
                    }
                };

                edge_ids.push(eid);
            }

            face_half_edges.push(edge_ids);
        }

        // A closed mesh leaves no half-edge without a face.
        if half_edges.iter().any(|e| e.face == INVALID) {
            return None;
        }

        for edge_ids in &face_half_edges {
            for i in 0..edge_ids.len() {
                half_edges[edge_ids[i] as usize].next = edge_ids[(i + 1) % edge_ids.len()];
            }
        }

        let mut built_faces = Vec::with_capacity(faces.len());
        for (fid, face_vertices) in faces.iter().enumerate() {
            let normal = newell_normal(&points, face_vertices)?;
            built_faces.push(Face {
                vertices: face_vertices.clone(),
                first_half_edge: face_half_edges[fid][0],
                normal,
            });
        }

        let centroid = Point::from(
            points.iter().map(|p| p.coords).sum::<Vector<Real>>() / points.len() as Real,
        );

        Some(Self {
            points,
            faces: built_faces,
            half_edges,
            centroid,
        })
    }

    /// The half-edge topology of an axis-aligned box with the given half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let he = half_extents;
        let points = vec![
            Point::new(-he.x, -he.y, -he.z),
            Point::new(he.x, -he.y, -he.z),
            Point::new(he.x, he.y, -he.z),
            Point::new(-he.x, he.y, -he.z),
            Point::new(-he.x, -he.y, he.z),
            Point::new(he.x, -he.y, he.z),
            Point::new(he.x, he.y, he.z),
            Point::new(-he.x, he.y, he.z),
        ];
        let faces = [
            vec![1, 2, 6, 5], // +x
            vec![0, 4, 7, 3], // -x
            vec![3, 7, 6, 2], // +y
            vec![0, 1, 5, 4], // -y
            vec![4, 5, 6, 7], // +z
            vec![0, 3, 2, 1], // -z
        ];

        Self::new(points, &faces).expect("a box is a closed two-manifold")
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn num_faces(&self) -> u32 {
        self.faces.len() as u32
    }

    /// The number of half-edges of this mesh (twice the number of edges).
    #[inline]
    pub fn num_half_edges(&self) -> u32 {
        self.half_edges.len() as u32
    }

    /// The i-th face of this mesh.
    #[inline]
    pub fn face(&self, id: u32) -> &Face {
        &self.faces[id as usize]
    }

    /// The i-th half-edge of this mesh.
    #[inline]
    pub fn half_edge(&self, id: u32) -> HalfEdge {
        self.half_edges[id as usize]
    }

    /// The position of the i-th vertex of this mesh.
    #[inline]
    pub fn vertex(&self, id: u32) -> Point<Real> {
        self.points[id as usize]
    }

    /// The outward unit normal of the i-th face of this mesh.
    #[inline]
    pub fn face_normal(&self, id: u32) -> UnitVector<Real> {
        self.faces[id as usize].normal
    }

    /// The average of the vertices of this mesh.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    /// All the vertices of this mesh.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The start and end vertex positions of the i-th half-edge.
    #[inline]
    pub fn half_edge_endpoints(&self, id: u32) -> (Point<Real>, Point<Real>) {
        let edge = self.half_edge(id);
        let next = self.half_edge(edge.next);
        (self.vertex(edge.vertex), self.vertex(next.vertex))
    }
}

/// The outward unit normal of a planar polygon with counter-clockwise
/// vertices, by Newell's method.
fn newell_normal(points: &[Point<Real>], vertices: &[u32]) -> Option<UnitVector<Real>> {
    let mut normal = Vector::zeros();

    for i in 0..vertices.len() {
        let p = points[vertices[i] as usize];
        let q = points[vertices[(i + 1) % vertices.len()] as usize];
        normal += Vector::new(
            (p.y - q.y) * (p.z + q.z),
            (p.z - q.z) * (p.x + q.x),
            (p.x - q.x) * (p.y + q.y),
        );
    }

    Unit::try_new(normal, DEFAULT_EPSILON)
}
