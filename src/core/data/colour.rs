#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHEAT: Self = Self::new(245, 222, 179);
    pub const BASE_SQUARE: Self = Self::new(100, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from unbounded channel values, clamping each to `0..=255`.
    #[must_use]
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clamped_saturates_both_ends() {
        assert_eq!(Colour::from_clamped(-20, 300, 128), Colour::new(0, 255, 128));
    }

    #[test]
    fn test_from_clamped_passes_through_in_range() {
        assert_eq!(Colour::from_clamped(1, 2, 3), Colour::new(1, 2, 3));
    }
}
