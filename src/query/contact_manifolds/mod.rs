//! Contact-manifold computation for the supported shape pairs.

pub use self::contact_manifold::{ContactManifold, ContactPoint};
pub use self::contact_manifold_ball_polyhedron::contact_manifold_ball_polyhedron;
pub use self::contact_manifold_capsule_polyhedron::contact_manifold_capsule_polyhedron;
pub use self::contact_manifold_polyhedron_polyhedron::contact_manifold_polyhedron_polyhedron;
pub use self::separating_axis_cache::SeparatingAxisCache;

mod contact_manifold;
mod contact_manifold_ball_polyhedron;
mod contact_manifold_capsule_polyhedron;
mod contact_manifold_polyhedron_polyhedron;
mod separating_axis_cache;
