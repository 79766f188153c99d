//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer, egui for the debug panel.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
