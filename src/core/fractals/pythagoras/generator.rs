use std::f64::consts::FRAC_PI_2;

use crate::core::actions::compute_visible_units::ports::unit_generator::UnitGenerator;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::point::Point;

/// Builds the right isosceles triangle on a base edge and the two squares on
/// its legs. The only place in the crate that touches trigonometry.
///
/// A zero-length edge yields a degenerate (zero-area) unit rather than an error.
#[must_use]
pub fn generate(left_base: Point, right_base: Point, depth: u32) -> GeometricUnit {
    let edge = right_base - left_base;
    let edge_angle = left_base.angle_to(right_base) + FRAC_PI_2;
    let mid = left_base + edge / 2.0;
    let apex = mid + Point::from_angle(edge_angle) * (edge.length() / 2.0);

    let left_angle = apex.angle_to(left_base);
    let right_angle = right_base.angle_to(apex);

    let left_translation = Point::from_angle(left_angle - FRAC_PI_2) * (apex - left_base).length();
    let right_translation =
        Point::from_angle(right_angle - FRAC_PI_2) * (right_base - apex).length();

    GeometricUnit::new(
        [left_base, right_base, apex],
        [
            left_base,
            apex,
            apex + left_translation,
            left_base + left_translation,
        ],
        [
            apex,
            right_base,
            right_base + right_translation,
            apex + right_translation,
        ],
        depth,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PythagorasGenerator;

impl UnitGenerator for PythagorasGenerator {
    #[inline]
    fn generate(&self, left_base: Point, right_base: Point, depth: u32) -> GeometricUnit {
        generate(left_base, right_base, depth)
    }
}
