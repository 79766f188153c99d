//! Input adapters: they turn user input into view requests.

#[cfg(feature = "gui")]
pub mod gui;
