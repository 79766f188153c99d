use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::pythagoras::generator::PythagorasGenerator;
use crate::core::fractals::pythagoras::iteration_cache::IterationCache;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        self.config.validate()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels borrows the window for the surface's lifetime.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Pythagoras Tree Explorer")
                .with_inner_size(LogicalSize::new(1024.0, 768.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;

        let cache = Arc::new(IterationCache::new(PythagorasGenerator, self.config.base_size));
        let controller = InteractiveController::new(cache, presenter.share_adapter());

        let size = window.inner_size();
        let state = GuiAppState::new(self.config.clone(), size.width, size.height);
        info!(width = size.width, height = size.height, "opening explorer window");

        let app = GuiApp::new(window, &event_loop, presenter, controller, state)?;

        app.run(event_loop)
    }
}
