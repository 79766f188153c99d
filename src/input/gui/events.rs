/// Custom user events for the GUI event loop.
///
/// The controller's worker thread sends these to wake the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The draw list changed or a view completed. The handler decides whether
    /// a redraw is actually needed.
    Wake,
}
