//! Computer move selection: a four-tier decision cascade over the product
//! board, driven by an injectable random source.

mod planner;

pub use planner::Planner;
