extern crate nalgebra as na;

mod capsule_polyhedron;
mod polyhedron_polyhedron;
mod temporal_coherence;
