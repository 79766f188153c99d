//! Pythagoras tree: the per-unit geometry, the memoized per-depth levels and
//! the zoom-driven depth policy.

pub mod colour_mapping;
pub mod errors;
pub mod expansion_plan;
pub mod generator;
pub mod iteration_cache;

pub use errors::PythagorasError;
pub use expansion_plan::{DepthPolicy, ExpansionPlan};
pub use generator::PythagorasGenerator;
pub use iteration_cache::IterationCache;
