use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6), creating parent directories as needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn encode(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
        let pixel_rect = buffer.pixel_rect();

        write!(writer, "P6\n{} {}\n255\n", pixel_rect.width(), pixel_rect.height())?;
        writer.write_all(buffer.buffer())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        Self::encode(buffer, BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_encode_writes_header_and_pixels() {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(2, 1).unwrap());
        buffer.fill(Colour::new(1, 2, 3));
        let mut out = Vec::new();

        PpmFilePresenter::encode(&buffer, &mut out).unwrap();

        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x01\x02\x03");
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("pythagoras-ppm-{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(PixelRect::from_size(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);

        fs::remove_dir_all(dir).unwrap();
    }
}
