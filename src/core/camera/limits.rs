#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    /// Smallest half-height of the view in world units. Keeps zoom positive.
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of the current scale added or removed per wheel notch.
    pub zoom_step_fraction: f64,
    /// Pixels of drag offset that move the camera by one scale unit.
    pub pan_divisor: f64,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            min_scale: f64::from(f32::EPSILON),
            max_scale: 1.0e9,
            zoom_step_fraction: 0.1,
            pan_divisor: 2500.0,
        }
    }
}
