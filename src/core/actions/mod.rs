pub mod cancellation;
pub mod compute_visible_units;
pub mod rasterize_units;
