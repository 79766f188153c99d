pub mod ports;
pub mod rasterize_units;

pub use rasterize_units::{RasterOptions, Scene, rasterize_units, render_scene};
