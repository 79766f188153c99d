use thiserror::Error;

use crate::config::ConfigError;
use crate::core::data::pixel_rect::PixelRectError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("framebuffer error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize framebuffer: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error("invalid frame size: {0}")]
    Frame(#[from] PixelRectError),
}
