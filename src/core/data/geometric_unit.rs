use crate::core::data::point::Point;

/// A base edge handed to the generator: `(left, right)`.
pub type BaseEdge = (Point, Point);

/// One subdivision step of the tree: a right triangle resting on a base edge
/// and the two squares standing on its legs.
///
/// Point ordering:
///
/// ```text
/// triangle      [base-left, base-right, apex]
/// left_square   [base-left, apex, apex + t, base-left + t]
/// right_square  [apex, base-right, base-right + t, apex + t]
/// ```
///
/// Traversing each square in index order yields a closed, non-self-intersecting
/// quad. Units are immutable once produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometricUnit {
    triangle: [Point; 3],
    left_square: [Point; 4],
    right_square: [Point; 4],
    depth: u32,
}

impl GeometricUnit {
    #[must_use]
    pub fn new(
        triangle: [Point; 3],
        left_square: [Point; 4],
        right_square: [Point; 4],
        depth: u32,
    ) -> Self {
        Self {
            triangle,
            left_square,
            right_square,
            depth,
        }
    }

    #[must_use]
    pub fn triangle(&self) -> &[Point; 3] {
        &self.triangle
    }

    #[must_use]
    pub fn left_square(&self) -> &[Point; 4] {
        &self.left_square
    }

    #[must_use]
    pub fn right_square(&self) -> &[Point; 4] {
        &self.right_square
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn apex(&self) -> Point {
        self.triangle[2]
    }

    /// Base edge of the unit grown on top of the left square.
    ///
    /// The outer edge is handed over base-side corner first; swapping the pair
    /// would flip the child's winding and grow it back into the square.
    #[must_use]
    pub fn left_child_base(&self) -> BaseEdge {
        (self.left_square[3], self.left_square[2])
    }

    /// Base edge of the unit grown on top of the right square.
    #[must_use]
    pub fn right_child_base(&self) -> BaseEdge {
        (self.right_square[3], self.right_square[2])
    }

    /// All eight square corners, left square first.
    pub fn square_corners(&self) -> impl Iterator<Item = &Point> {
        self.left_square.iter().chain(self.right_square.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_unit() -> GeometricUnit {
        let bl = Point::new(0.0, 0.0);
        let br = Point::new(2.0, 0.0);
        let apex = Point::new(1.0, 1.0);

        GeometricUnit::new(
            [bl, br, apex],
            [bl, apex, Point::new(0.0, 2.0), Point::new(-1.0, 1.0)],
            [apex, br, Point::new(3.0, 1.0), Point::new(2.0, 2.0)],
            4,
        )
    }

    #[test]
    fn test_accessors() {
        let unit = sample_unit();

        assert_eq!(unit.depth(), 4);
        assert_eq!(unit.apex(), Point::new(1.0, 1.0));
        assert_eq!(unit.triangle()[0], Point::new(0.0, 0.0));
        assert_eq!(unit.left_square()[1], unit.apex());
        assert_eq!(unit.right_square()[0], unit.apex());
    }

    #[test]
    fn test_child_bases_take_outer_edges_base_side_first() {
        let unit = sample_unit();

        assert_eq!(
            unit.left_child_base(),
            (Point::new(-1.0, 1.0), Point::new(0.0, 2.0))
        );
        assert_eq!(
            unit.right_child_base(),
            (Point::new(2.0, 2.0), Point::new(3.0, 1.0))
        );
    }

    #[test]
    fn test_square_corners_yields_left_then_right() {
        let unit = sample_unit();
        let corners: Vec<Point> = unit.square_corners().copied().collect();

        assert_eq!(corners.len(), 8);
        assert_eq!(&corners[..4], unit.left_square());
        assert_eq!(&corners[4..], unit.right_square());
    }
}
