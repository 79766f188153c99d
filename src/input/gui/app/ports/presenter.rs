use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, pixels::Error>;

    /// The half handed to the controller's worker thread.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Drains the controller events received since the last call.
    fn take_render_events(&self) -> Vec<RenderEvent>;

    /// Shows `frame` with the egui output painted over it.
    fn render(
        &mut self,
        frame: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
