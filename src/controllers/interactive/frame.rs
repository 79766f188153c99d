use crate::controllers::interactive::data::draw_list::DrawList;
use crate::core::actions::rasterize_units::ports::colour_map::ColourMap;
use crate::core::actions::rasterize_units::rasterize_units::{RasterOptions, Scene, render_scene};
use crate::core::camera::camera::Camera;
use crate::core::data::colour::Colour;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub base_size: f64,
    pub options: RasterOptions,
    pub background: Colour,
}

/// Draws the cached default levels plus whatever the worker has published.
///
/// The draw list is copied under its lock and rasterized after the lock is
/// released, so publishing never waits on a frame. Returns how many
/// published units were drawn.
pub fn render_frame<M: ColourMap + ?Sized>(
    buffer: &mut PixelBuffer,
    camera: &Camera,
    default_units: &[GeometricUnit],
    draw_list: &DrawList,
    colour_map: &M,
    style: FrameStyle,
) -> usize {
    let incremental = draw_list.snapshot();
    let scene = Scene {
        base_size: style.base_size,
        default_units,
        incremental_units: &incremental,
    };
    render_scene(buffer, camera, &scene, colour_map, style.options, style.background);

    incremental.len()
}
