use crate::core::camera::limits::CameraLimits;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Orthographic 2D camera.
///
/// The world is drawn translated by `center` and the window shows
/// `scale * aspect` world units either side horizontally and `scale`
/// vertically, so the visible world box is centred on `-center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center: Point,
    scale: f64,
    width: u32,
    height: u32,
    limits: CameraLimits,
}

impl Camera {
    #[must_use]
    pub fn new(width: u32, height: u32, scale: f64, limits: CameraLimits) -> Self {
        let mut camera = Self {
            center: Point::default(),
            scale: limits.min_scale,
            width: width.max(1),
            height: height.max(1),
            limits,
        };
        camera.set_scale(scale);
        camera
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn set_center(&mut self, center: Point) {
        if center.is_finite() {
            self.center = center;
        }
    }

    /// Clamped into `[min_scale, max_scale]`; non-finite input falls back to `min_scale`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_finite() {
            scale.clamp(self.limits.min_scale, self.limits.max_scale)
        } else {
            self.limits.min_scale
        };
    }

    /// One wheel step. Positive deltas widen the view, negative deltas narrow it.
    /// Returns whether the scale changed.
    pub fn zoom(&mut self, delta: f64) -> bool {
        if delta == 0.0 || !delta.is_finite() {
            return false;
        }

        let before = self.scale;
        let step = self.scale * self.limits.zoom_step_fraction;
        self.set_scale(if delta > 0.0 { before + step } else { before - step });

        self.scale != before
    }

    /// Applies one frame of drag panning. `dx_pixels`/`dy_pixels` are the grab
    /// point minus the current pointer position; the camera keeps drifting
    /// every frame while that offset is non-zero. Screen y grows downwards,
    /// world y upwards.
    pub fn pan(&mut self, dx_pixels: f64, dy_pixels: f64) {
        let factor = self.scale / self.limits.pan_divisor;
        self.set_center(self.center + Point::new(dx_pixels * factor, -dy_pixels * factor));
    }

    /// Zero sizes (minimized windows) are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        let half = Point::new(self.scale * self.aspect_ratio(), self.scale);
        let origin = Point::default() - self.center;

        Viewport::new(origin - half, origin + half)
    }

    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        f64::from(self.height) / (2.0 * self.scale)
    }

    /// Continuous raster position of a world point; `(0, 0)` is the top-left
    /// corner of the frame.
    #[must_use]
    pub fn world_to_pixel(&self, point: Point) -> (f64, f64) {
        let left = -self.center.x - self.scale * self.aspect_ratio();
        let top = -self.center.y + self.scale;
        let ppu = self.pixels_per_unit();

        ((point.x - left) * ppu, (top - point.y) * ppu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn camera() -> Camera {
        Camera::new(800, 600, 1000.0, CameraLimits::default())
    }

    #[test]
    fn zoom_steps_by_a_tenth_of_scale() {
        let mut camera = camera();

        assert!(camera.zoom(1.0));
        assert!((camera.scale() - 1100.0).abs() < EPSILON);

        assert!(camera.zoom(-1.0));
        assert!((camera.scale() - 990.0).abs() < EPSILON);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut camera = camera();

        assert!(!camera.zoom(0.0));
        assert!(!camera.zoom(f64::NAN));
        assert_eq!(camera.scale(), 1000.0);
    }

    #[test]
    fn scale_never_drops_below_minimum() {
        let limits = CameraLimits {
            min_scale: 1.0,
            ..CameraLimits::default()
        };
        let mut camera = Camera::new(100, 100, 1.05, limits);

        camera.zoom(-1.0);
        camera.zoom(-1.0);

        assert_eq!(camera.scale(), 1.0);
    }

    #[test]
    fn non_positive_scale_is_clamped() {
        let camera = Camera::new(100, 100, 0.0, CameraLimits::default());

        assert!(camera.scale() > 0.0);
    }

    #[test]
    fn viewport_is_centred_on_negated_center() {
        let mut camera = camera();
        camera.set_center(Point::new(100.0, -50.0));
        let viewport = camera.viewport().unwrap();

        let aspect = 800.0 / 600.0;
        assert!((viewport.left().x - (-100.0 - 1000.0 * aspect)).abs() < EPSILON);
        assert!((viewport.right().x - (-100.0 + 1000.0 * aspect)).abs() < EPSILON);
        assert!((viewport.left().y - (50.0 - 1000.0)).abs() < EPSILON);
        assert!((viewport.right().y - (50.0 + 1000.0)).abs() < EPSILON);
    }

    #[test]
    fn pan_moves_center_against_screen_y() {
        let mut camera = camera();
        camera.pan(250.0, 250.0);

        assert!((camera.center().x - 100.0).abs() < EPSILON);
        assert!((camera.center().y + 100.0).abs() < EPSILON);
    }

    #[test]
    fn resize_clamps_zero_dimensions() {
        let mut camera = camera();
        camera.resize(0, 0);

        assert_eq!(camera.width(), 1);
        assert_eq!(camera.height(), 1);
        assert!(camera.viewport().is_ok());
    }

    #[test]
    fn world_to_pixel_maps_viewport_corners_to_frame_corners() {
        let mut camera = camera();
        camera.set_center(Point::new(-300.0, 20.0));
        let viewport = camera.viewport().unwrap();

        let top_left = camera.world_to_pixel(Point::new(viewport.left().x, viewport.right().y));
        let bottom_right = camera.world_to_pixel(Point::new(viewport.right().x, viewport.left().y));

        assert!(top_left.0.abs() < EPSILON && top_left.1.abs() < EPSILON);
        assert!((bottom_right.0 - 800.0).abs() < 1e-6);
        assert!((bottom_right.1 - 600.0).abs() < 1e-6);
    }
}
