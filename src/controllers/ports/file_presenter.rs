use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished frame.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, path: impl AsRef<Path>) -> std::io::Result<()>;
}
