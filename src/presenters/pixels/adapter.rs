use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Worker-side half of the presenter: queues events and wakes the UI thread.
pub struct PixelsAdapter {
    render_events: Mutex<Vec<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        self.render_events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        // Fails only once the event loop has exited.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_events: Mutex::new(Vec::new()),
            event_loop_proxy,
        }
    }

    pub fn take_render_events(&self) -> Vec<RenderEvent> {
        std::mem::take(
            &mut *self
                .render_events
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}
