use crate::core::data::colour::Colour;
use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of frame {}x{}",
        pixel.x, pixel.y, pixel_rect.width(), pixel_rect.height()
    )]
    PixelOutsideBounds { pixel: Pixel, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

/// Packed RGB8 frame, row-major from the rect's top-left pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(pixel_rect: PixelRect, buffer: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    pub fn set_pixel(&mut self, pixel: Pixel, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.pixel_rect.contains_pixel(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = self.index_of(pixel);
        self.write(index, colour);
        Ok(())
    }

    /// Paints the inclusive run `x_start..=x_end` on row `y`, clipped to the frame.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, colour: Colour) {
        let top_left = self.pixel_rect.top_left();
        let bottom_right = self.pixel_rect.bottom_right();

        if y < top_left.y || y > bottom_right.y {
            return;
        }

        let start = x_start.max(top_left.x);
        let end = x_end.min(bottom_right.x);

        if start > end {
            return;
        }

        let first = self.index_of(Pixel { x: start, y });
        let count = (end - start + 1) as usize;

        for offset in 0..count {
            self.write(first + offset * BYTES_PER_PIXEL, colour);
        }
    }

    fn index_of(&self, pixel: Pixel) -> usize {
        let top_left = self.pixel_rect.top_left();
        let relative_x = (pixel.x - top_left.x) as usize;
        let relative_y = (pixel.y - top_left.y) as usize;

        (relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL
    }

    fn write(&mut self, index: usize, colour: Colour) {
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(frame(10, 10));

        assert_eq!(buffer.buffer().len(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_checks_length() {
        let result = PixelBuffer::from_data(frame(2, 2), vec![0; 6]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 6
            }
        );
        assert!(PixelBuffer::from_data(frame(2, 2), vec![7; 12]).is_ok());
    }

    #[test]
    fn test_fill_paints_every_pixel() {
        let mut buffer = PixelBuffer::new(frame(3, 2));
        buffer.fill(Colour::new(1, 2, 3));

        assert!(buffer.buffer().chunks_exact(3).all(|p| p == [1, 2, 3]));
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(frame(3, 3));
        buffer
            .set_pixel(Pixel { x: 1, y: 1 }, Colour::new(255, 0, 0))
            .unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(frame(3, 3));
        let result = buffer.set_pixel(Pixel { x: 3, y: 0 }, Colour::default());

        assert!(matches!(
            result,
            Err(PixelBufferError::PixelOutsideBounds { .. })
        ));
    }

    #[test]
    fn test_fill_span_clips_to_frame() {
        let mut buffer = PixelBuffer::new(frame(4, 2));
        buffer.fill_span(1, -5, 1, Colour::new(9, 9, 9));
        buffer.fill_span(5, 0, 3, Colour::new(1, 1, 1));

        let row_one = &buffer.buffer()[12..24];
        assert_eq!(&row_one[..6], &[9, 9, 9, 9, 9, 9]);
        assert_eq!(&row_one[6..], &[0, 0, 0, 0, 0, 0]);
        assert!(buffer.buffer()[..12].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_span_ignores_empty_run() {
        let mut buffer = PixelBuffer::new(frame(4, 1));
        buffer.fill_span(0, 3, 2, Colour::new(5, 5, 5));

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }
}
