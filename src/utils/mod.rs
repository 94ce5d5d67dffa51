//! Various unrelated utilities used internally.

pub use self::parallel_vectors::are_parallel_vectors;
pub(crate) use self::parallel_vectors::PARALLEL_VECTORS_EPSILON;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod parallel_vectors;
mod point_cloud_support_point;
mod sorted_pair;
