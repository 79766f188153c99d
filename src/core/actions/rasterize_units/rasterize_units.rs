use crate::core::actions::rasterize_units::ports::colour_map::ColourMap;
use crate::core::camera::camera::Camera;
use crate::core::data::colour::Colour;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterOptions {
    /// Also fill the right triangle between each unit's squares.
    pub include_triangles: bool,
}

/// Everything drawn in one frame, back to front.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub base_size: f64,
    /// Cached levels up to the default depth, drawn for every viewport.
    pub default_units: &'a [GeometricUnit],
    /// Whatever the visibility worker has published so far.
    pub incremental_units: &'a [GeometricUnit],
}

/// Clears `buffer` to `background` and draws the base square followed by
/// both unit lists.
pub fn render_scene<M: ColourMap + ?Sized>(
    buffer: &mut PixelBuffer,
    camera: &Camera,
    scene: &Scene<'_>,
    colour_map: &M,
    options: RasterOptions,
    background: Colour,
) {
    buffer.fill(background);

    let size = scene.base_size;
    let base_square = [
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(0.0, size),
    ];
    fill_convex_polygon(buffer, camera, &base_square, Colour::BASE_SQUARE);

    rasterize_units(buffer, scene.default_units, camera, colour_map, options);
    rasterize_units(buffer, scene.incremental_units, camera, colour_map, options);
}

/// Fills each unit's squares (and optionally its triangle) in list order,
/// coloured by depth. Later units overdraw earlier ones.
pub fn rasterize_units<M: ColourMap + ?Sized>(
    buffer: &mut PixelBuffer,
    units: &[GeometricUnit],
    camera: &Camera,
    colour_map: &M,
    options: RasterOptions,
) {
    for unit in units {
        let colour = colour_map.map(unit.depth());

        if options.include_triangles {
            fill_convex_polygon(buffer, camera, unit.triangle(), colour);
        }
        fill_convex_polygon(buffer, camera, unit.left_square(), colour);
        fill_convex_polygon(buffer, camera, unit.right_square(), colour);
    }
}

/// Scanline fill sampling pixel centres. A polygon that covers no pixel
/// centre still paints the pixel under its centroid, so distant units do
/// not vanish.
fn fill_convex_polygon(buffer: &mut PixelBuffer, camera: &Camera, corners: &[Point], colour: Colour) {
    if corners.len() < 3 {
        return;
    }

    let projected: Vec<(f64, f64)> = corners.iter().map(|c| camera.world_to_pixel(*c)).collect();
    if projected.iter().any(|(x, y)| !(x.is_finite() && y.is_finite())) {
        return;
    }

    let frame = buffer.pixel_rect();
    let (min_x, max_x, min_y, max_y) = projected.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), &(x, y)| (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y)),
    );

    if max_x < f64::from(frame.top_left().x)
        || min_x > f64::from(frame.bottom_right().x) + 1.0
        || max_y < f64::from(frame.top_left().y)
        || min_y > f64::from(frame.bottom_right().y) + 1.0
    {
        return;
    }

    let first_row = ((min_y - 0.5).ceil() as i64).max(i64::from(frame.top_left().y));
    let last_row = ((max_y - 0.5).floor() as i64).min(i64::from(frame.bottom_right().y));
    let mut painted = false;

    for row in first_row..=last_row {
        let sample_y = row as f64 + 0.5;
        let Some((left, right)) = row_extent(&projected, sample_y) else {
            continue;
        };

        let x_start = (left - 0.5).ceil();
        let x_end = (right - 0.5).floor();
        if x_start > x_end {
            continue;
        }

        let x_start = x_start.max(f64::from(frame.top_left().x) - 1.0) as i32;
        let x_end = x_end.min(f64::from(frame.bottom_right().x) + 1.0) as i32;
        buffer.fill_span(row as i32, x_start, x_end, colour);
        painted = true;
    }

    if !painted {
        let count = projected.len() as f64;
        let (sum_x, sum_y) = projected
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let centroid = Pixel {
            x: (sum_x / count).floor() as i32,
            y: (sum_y / count).floor() as i32,
        };
        // Outside the frame is simply not drawn.
        let _ = buffer.set_pixel(centroid, colour);
    }
}

/// Horizontal extent of the polygon on the line `y = sample_y`.
fn row_extent(projected: &[(f64, f64)], sample_y: f64) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;

    for (index, &(ax, ay)) in projected.iter().enumerate() {
        let (bx, by) = projected[(index + 1) % projected.len()];
        let crosses = (ay <= sample_y && sample_y < by) || (by <= sample_y && sample_y < ay);
        if !crosses {
            continue;
        }

        let x = ax + (sample_y - ay) / (by - ay) * (bx - ax);
        extent = Some(match extent {
            Some((left, right)) => (left.min(x), right.max(x)),
            None => (x, x),
        });
    }

    extent
}
