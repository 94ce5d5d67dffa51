//! Narrow-phase collision-detection queries.

pub use self::contact_manifolds::{
    contact_manifold_ball_polyhedron, contact_manifold_capsule_polyhedron,
    contact_manifold_polyhedron_polyhedron, ContactManifold, ContactPoint, SeparatingAxisCache,
};
pub use self::narrow_phase::NarrowPhaseInfo;

pub mod clip;
pub mod closest_points;
pub mod contact_manifolds;
mod narrow_phase;
pub mod sat;
