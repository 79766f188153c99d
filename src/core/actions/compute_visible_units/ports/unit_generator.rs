use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::point::Point;

/// Produces one tree unit from a base edge.
///
/// Implementations must be pure: the same edge and depth always yield the same
/// unit, since cached levels are never recomputed.
pub trait UnitGenerator: Send + Sync {
    fn generate(&self, left_base: Point, right_base: Point, depth: u32) -> GeometricUnit;

    /// Expands `parent` into its left and right children at `parent.depth() + 1`.
    fn children(&self, parent: &GeometricUnit) -> [GeometricUnit; 2] {
        let depth = parent.depth() + 1;
        let (left_l, left_r) = parent.left_child_base();
        let (right_l, right_r) = parent.right_child_base();

        [
            self.generate(left_l, left_r, depth),
            self.generate(right_l, right_r, depth),
        ]
    }
}
