use crate::core::data::point::Point;
use thiserror::Error;

/// Slack used when seeding incremental expansion: the near box extends the
/// visible box by this many widths/heights on every side.
pub const DEFAULT_NEAR_MARGIN: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned box in camera-relative world coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: Point,
    right: Point,
}

impl Viewport {
    pub fn new(left: Point, right: Point) -> Result<Self, ViewportError> {
        let width = right.x - left.x;
        let height = right.y - left.y;

        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.x - self.left.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.right.y - self.left.y
    }

    /// Inclusive box test.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left.x
            && point.x <= self.right.x
            && point.y >= self.left.y
            && point.y <= self.right.y
    }

    /// Containment against the box grown by `margin` times its own size on
    /// each side. Only used to pick expansion seeds.
    #[must_use]
    pub fn is_near(&self, point: Point, margin: f64) -> bool {
        let extent = self.right - self.left;
        let near_left = self.left - extent * margin;
        let near_right = self.right + extent * margin;

        point.x >= near_left.x
            && point.x <= near_right.x
            && point.y >= near_left.y
            && point.y <= near_right.y
    }

    #[must_use]
    pub fn contains_any<'a>(&self, points: impl IntoIterator<Item = &'a Point>) -> bool {
        points.into_iter().any(|p| self.contains(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Point::new(-10.0, -5.0), Point::new(100.0, 200.0)).unwrap()
    }

    #[test]
    fn test_viewport_new_valid() {
        let vp = viewport();

        assert_eq!(vp.left(), Point::new(-10.0, -5.0));
        assert_eq!(vp.right(), Point::new(100.0, 200.0));
        assert_eq!(vp.width(), 110.0);
        assert_eq!(vp.height(), 205.0);
    }

    #[test]
    fn test_viewport_size_must_be_positive() {
        let zero_width = Viewport::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        let negative_height = Viewport::new(Point::new(0.0, 0.0), Point::new(10.0, -1.0));

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 10.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ViewportError::InvalidSize {
                width: 10.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_corners() {
        let result = Viewport::new(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0));

        assert!(result.is_err());
    }

    #[test]
    fn test_contains_is_reflexive_on_corners() {
        let vp = viewport();

        assert!(vp.contains(vp.left()));
        assert!(vp.contains(vp.right()));
        assert!(vp.contains(Point::new(vp.left().x, vp.right().y)));
        assert!(vp.contains(Point::new(vp.right().x, vp.left().y)));
    }

    #[test]
    fn test_contains_rejects_points_outside() {
        let vp = viewport();
        let nudge = 1e-9;

        assert!(vp.contains(Point::new(50.0, 50.0)));
        assert!(!vp.contains(Point::new(100.0 + nudge, 50.0)));
        assert!(!vp.contains(Point::new(-10.0 - nudge, 50.0)));
        assert!(!vp.contains(Point::new(50.0, -5.0 - nudge)));
        assert!(!vp.contains(Point::new(50.0, 200.0 + nudge)));
    }

    #[test]
    fn test_is_near_accepts_points_within_margin() {
        let vp = Viewport::new(Point::new(0.0, 0.0), Point::new(10.0, 20.0)).unwrap();

        assert!(vp.is_near(Point::new(-29.0, 5.0), DEFAULT_NEAR_MARGIN));
        assert!(vp.is_near(Point::new(40.0, 80.0), DEFAULT_NEAR_MARGIN));
        assert!(vp.is_near(Point::new(-30.0, -60.0), DEFAULT_NEAR_MARGIN));
        assert!(!vp.is_near(Point::new(-31.0, 5.0), DEFAULT_NEAR_MARGIN));
        assert!(!vp.is_near(Point::new(5.0, 81.0), DEFAULT_NEAR_MARGIN));
    }

    #[test]
    fn test_is_near_with_zero_margin_matches_contains() {
        let vp = viewport();

        for point in [
            Point::new(0.0, 0.0),
            Point::new(100.0, 200.0),
            Point::new(101.0, 0.0),
            Point::new(0.0, -6.0),
        ] {
            assert_eq!(vp.is_near(point, 0.0), vp.contains(point));
        }
    }

    #[test]
    fn test_contains_any() {
        let vp = viewport();
        let inside = [Point::new(-100.0, 0.0), Point::new(0.0, 0.0)];
        let outside = [Point::new(-100.0, 0.0), Point::new(0.0, 1000.0)];

        assert!(vp.contains_any(&inside));
        assert!(!vp.contains_any(&outside));
    }
}
