use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::data::draw_list::{DrawList, DrawListWriter};
use crate::controllers::interactive::data::view_request::ViewRequest;
use crate::controllers::interactive::frame::{FrameStyle, render_frame};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{Cancelled, NeverCancel};
use crate::core::actions::compute_visible_units::compute_visible_units::compute_visible_units;
use crate::core::actions::rasterize_units::rasterize_units::RasterOptions;
use crate::core::camera::camera::Camera;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::pythagoras::colour_mapping::factory::pythagoras_colour_map_factory;
use crate::core::fractals::pythagoras::iteration_cache::IterationCache;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid view: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid frame: {0}")]
    Frame(#[from] PixelRectError),
    #[error("visibility computation was cancelled")]
    Cancelled(#[from] Cancelled),
    #[error("nothing has been rendered yet")]
    NothingRendered,
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotStats {
    pub target_depth: u32,
    pub default_units: usize,
    pub incremental_units: usize,
    pub compute_duration: Duration,
    pub raster_duration: Duration,
}

/// Renders single frames from a camera and hands them to a file presenter.
///
/// Runs the same pipeline as the interactive view, synchronously: cached levels
/// up to the default depth plus a full visibility job for the camera's viewport.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    cache: Arc<IterationCache>,
    config: ExplorerConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, cache: Arc<IterationCache>, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            cache,
            config,
            buffer: None,
        }
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        options: RasterOptions,
    ) -> Result<SnapshotStats, SnapshotError> {
        let request =
            ViewRequest::from_camera(camera, &self.config.depth_policy, self.config.near_margin)?;
        let pixel_rect = PixelRect::from_size(camera.width(), camera.height())?;

        let start = Instant::now();
        let default_units = self.cache.default_draw_list(request.plan.default_depth);

        let draw_list = Arc::new(DrawList::new());
        draw_list.reset(1);
        let writer = DrawListWriter::new(Arc::clone(&draw_list), 1);
        compute_visible_units(
            &*self.cache,
            request.viewport,
            request.plan,
            &NeverCancel,
            &writer,
        )?;
        let compute_duration = start.elapsed();

        let colour_map = pythagoras_colour_map_factory(
            self.config.colour_map,
            self.config.depth_policy.max_iteration,
        );

        let start = Instant::now();
        let mut buffer = PixelBuffer::new(pixel_rect);
        let style = FrameStyle {
            base_size: self.cache.base_size(),
            options,
            background: self.config.background,
        };
        let incremental_units = render_frame(
            &mut buffer,
            camera,
            &default_units,
            &draw_list,
            colour_map.as_ref(),
            style,
        );
        let raster_duration = start.elapsed();

        let stats = SnapshotStats {
            target_depth: request.plan.target_depth,
            default_units: default_units.len(),
            incremental_units,
            compute_duration,
            raster_duration,
        };

        info!(
            width = camera.width(),
            height = camera.height(),
            scale = camera.scale(),
            target_depth = stats.target_depth,
            default_units = stats.default_units,
            incremental_units = stats.incremental_units,
            compute_ms = compute_duration.as_millis() as u64,
            raster_ms = raster_duration.as_millis() as u64,
            "rendered snapshot"
        );

        self.buffer = Some(buffer);
        Ok(stats)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let buffer = self.buffer.as_ref().ok_or(SnapshotError::NothingRendered)?;
        let path = path.as_ref();

        self.presenter.present(buffer, path)?;
        info!(path = %path.display(), "wrote snapshot");

        Ok(())
    }
}
