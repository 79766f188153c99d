use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, error, warn};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window},
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::batch_data::BatchData;
use crate::controllers::interactive::data::completion_data::CompletionData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::frame::{FrameStyle, render_frame};
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::pythagoras::colour_mapping::factory::pythagoras_colour_map_factory;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    state: GuiAppState,
    /// Cached levels through the default depth, drawn under every view.
    default_units: Vec<GeometricUnit>,
    frame: PixelBuffer,
    last_batch: Option<BatchData>,
    last_completion: Option<CompletionData>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        state: GuiAppState,
    ) -> Result<Self, GuiError> {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let default_depth = state.config().depth_policy.default_depth;
        let default_units = controller.cache().default_draw_list(default_depth);
        debug!(default_depth, units = default_units.len(), "default draw list ready");

        let frame = PixelBuffer::new(PixelRect::from_size(
            state.camera.width(),
            state.camera.height(),
        )?);

        Ok(Self {
            window,
            presenter,
            controller,
            state,
            default_units,
            frame,
            last_batch: None,
            last_completion: None,
            egui_ctx,
            egui_state,
        })
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        self.submit_view();

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.absorb_render_events() {
                    self.window.request_redraw();
                }
            }
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(&event, elwt);
            }
            Event::AboutToWait => {
                if self.state.redraw_pending || self.state.is_dragging() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.state.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Named(NamedKey::F11) => self.toggle_fullscreen(),
                _ => {}
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Right,
                ..
            } => match state {
                ElementState::Pressed if !response.consumed => {
                    let pointer = self.state.pointer();
                    self.state.begin_drag(pointer);
                }
                ElementState::Released => {
                    self.state.end_drag();
                }
                ElementState::Pressed => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.state.track_pointer((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                self.state.zoom(delta);
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    error!(error = %err, "render failed");
                    elwt.exit();
                }
            }
            _ => {}
        }

        if self.state.take_stale_view() {
            self.submit_view();
        }
    }

    fn toggle_fullscreen(&mut self) {
        let fullscreen = self.state.toggle_fullscreen();
        debug!(fullscreen, "toggling fullscreen");

        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));

        let size = self.window.inner_size();
        self.resize(size.width, size.height);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.presenter.resize(width, height) {
            warn!(width, height, error = %err, "failed to resize framebuffer");
        }

        self.state.resize(width, height);
    }

    fn submit_view(&mut self) {
        self.state.take_stale_view();
        match self.state.view_request() {
            Ok(request) => {
                let generation = self.controller.submit_view(request);
                self.state.record_submission(generation);
            }
            Err(err) => warn!(error = %err, "skipping view submission"),
        }
    }

    /// Returns whether anything for the current view arrived.
    fn absorb_render_events(&mut self) -> bool {
        let current = self.state.latest_submitted_generation;
        let mut changed = false;

        for event in self.presenter.take_render_events() {
            if event.generation() != current {
                continue;
            }

            match event {
                RenderEvent::Batch(batch) => self.last_batch = Some(batch),
                RenderEvent::Completed(completion) => self.last_completion = Some(completion),
            }
            changed = true;
        }

        changed
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.state.redraw_pending = false;
        if self.state.apply_drag() {
            self.state.redraw_pending = true;
        }

        let previous_view = (self.state.colour_map_kind, self.state.include_triangles);
        let reset_requested = {
            let mut egui_output = self.update_ui();
            self.egui_state
                .handle_platform_output(self.window, std::mem::take(&mut egui_output.platform_output));

            if egui_output
                .viewport_output
                .values()
                .any(|v| v.repaint_delay.is_zero())
            {
                self.state.redraw_pending = true;
            }

            self.rasterize_frame()?;
            self.presenter.render(&self.frame, egui_output, &self.egui_ctx)?;
            self.state.reset_requested
        };

        if reset_requested {
            self.state.reset_requested = false;
            self.state.reset_view();
            self.submit_view();
        }
        if previous_view != (self.state.colour_map_kind, self.state.include_triangles) {
            self.state.redraw_pending = true;
        }

        Ok(())
    }

    fn rasterize_frame(&mut self) -> Result<(), GuiError> {
        let width = self.state.camera.width();
        let height = self.state.camera.height();
        let frame_rect = self.frame.pixel_rect();

        if frame_rect.width() != width || frame_rect.height() != height {
            self.frame = PixelBuffer::new(PixelRect::from_size(width, height)?);
        }

        let config = self.state.config();
        let colour_map = pythagoras_colour_map_factory(
            self.state.colour_map_kind,
            config.depth_policy.max_iteration,
        );
        let style = FrameStyle {
            base_size: config.base_size,
            options: self.state.raster_options(),
            background: config.background,
        };

        render_frame(
            &mut self.frame,
            &self.state.camera,
            &self.default_units,
            self.controller.draw_list(),
            colour_map.as_ref(),
            style,
        );

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let state = &mut self.state;
        let controller = &self.controller;
        let last_batch = self.last_batch;
        let last_completion = self.last_completion;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Debug Panel")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.heading("Pythagoras Tree");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("pythagoras_colour_map")
                            .selected_text(state.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PythagorasColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut state.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });
                    ui.checkbox(&mut state.include_triangles, "Fill triangles");

                    ui.separator();
                    let center = state.camera.center();
                    ui.label(format!("Scale: {:.4}", state.camera.scale()));
                    ui.label(format!("Center: ({:.2}, {:.2})", -center.x, -center.y));
                    if let Ok(request) = state.view_request() {
                        ui.label(format!(
                            "Depths: {} cached, target {}",
                            request.plan.default_depth, request.plan.target_depth
                        ));
                    }

                    if ui.button("Reset view").clicked() {
                        state.reset_requested = true;
                    }

                    ui.separator();
                    ui.label(format!(
                        "Window size: {}x{}",
                        state.camera.width(),
                        state.camera.height()
                    ));
                    ui.label(format!("Worker: {}", controller.phase()));
                    ui.label(format!(
                        "Generation: {} (completed {})",
                        state.latest_submitted_generation,
                        controller.last_completed_generation()
                    ));
                    ui.label(format!("Visible units: {}", controller.draw_list().len()));
                    if let Some(batch) = last_batch {
                        ui.label(format!("Last batch: depth {} ({} units)", batch.depth, batch.units));
                    }
                    if let Some(completion) = last_completion {
                        ui.label(format!(
                            "Last view: {} ms",
                            completion.compute_duration.as_millis()
                        ));
                    }

                    ui.separator();
                    ui.small("Right-drag to pan, wheel to zoom, F11 fullscreen, Esc quits");
                });
        })
    }
}
