use crate::core::data::pixel::Pixel;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive rectangle of pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Pixel,
    bottom_right: Pixel,
}

impl PixelRect {
    pub fn new(top_left: Pixel, bottom_right: Pixel) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Frame of `width` x `height` pixels anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let right = i64::from(width) - 1;
        let bottom = i64::from(height) - 1;

        if width == 0 || height == 0 || right > i64::from(i32::MAX) || bottom > i64::from(i32::MAX) {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Pixel { x: 0, y: 0 },
            Pixel {
                x: right as i32,
                y: bottom as i32,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Pixel {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Pixel {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Pixel) -> bool {
        self.top_left.x <= pixel.x
            && self.top_left.y <= pixel.y
            && self.bottom_right.x >= pixel.x
            && self.bottom_right.y >= pixel.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Pixel { x: -10, y: -20 }, Pixel { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::new(Pixel { x: 3, y: 3 }, Pixel { x: 3, y: 3 }).unwrap();

        assert_eq!(rect.size(), 1);
    }

    #[test]
    fn test_inverted_rect_is_rejected() {
        let rect = PixelRect::new(Pixel { x: 2, y: 2 }, Pixel { x: -2, y: 5 });

        assert_eq!(rect, Err(PixelRectError::InvalidSize { width: -3, height: 4 }));
    }

    #[test]
    fn test_from_size() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Pixel { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Pixel { x: 799, y: 599 });
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_from_size_rejects_zero() {
        assert!(PixelRect::from_size(0, 10).is_err());
        assert!(PixelRect::from_size(10, 0).is_err());
    }

    #[test]
    fn test_contains_pixel() {
        let rect = PixelRect::new(Pixel { x: -50, y: -50 }, Pixel { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_pixel(Pixel { x: -50, y: 100 }));
        assert!(rect.contains_pixel(Pixel { x: 0, y: 0 }));
        assert!(!rect.contains_pixel(Pixel { x: 101, y: 0 }));
        assert!(!rect.contains_pixel(Pixel { x: 0, y: -51 }));
    }
}
