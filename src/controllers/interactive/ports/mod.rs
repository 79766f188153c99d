//! Outbound interfaces of the interactive controller.

pub mod presenter;
