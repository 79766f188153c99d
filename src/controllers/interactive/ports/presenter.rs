use crate::controllers::interactive::events::render::RenderEvent;

/// Called from the worker thread. Implementations should hand the event off
/// and return quickly.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
