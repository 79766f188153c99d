//! Interactive Pythagoras tree explorer.
//!
//! The tree is memoized per depth up to a fixed default depth. Beyond that,
//! a background worker expands only the units that stay inside the current
//! viewport, publishing each depth as soon as it is ready.

pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;

pub use crate::config::{ConfigError, ExplorerConfig};
pub use crate::controllers::interactive::{DrawList, InteractiveController, ViewRequest};
pub use crate::controllers::snapshot::{SnapshotController, SnapshotError, SnapshotStats};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::compute_visible_units::{
    VisibilityJob, VisibilityReport, WorkerPhase, compute_visible_units,
};
pub use crate::core::actions::rasterize_units::RasterOptions;
pub use crate::core::camera::{Camera, CameraLimits};
pub use crate::core::data::geometric_unit::GeometricUnit;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
pub use crate::core::fractals::pythagoras::{
    DepthPolicy, ExpansionPlan, IterationCache, PythagorasError, PythagorasGenerator,
};
#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
pub use crate::presenters::file::ppm::PpmFilePresenter;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
