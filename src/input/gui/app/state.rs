use crate::config::ExplorerConfig;
use crate::controllers::interactive::data::view_request::ViewRequest;
use crate::core::actions::rasterize_units::rasterize_units::RasterOptions;
use crate::core::camera::camera::Camera;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;

/// Right-button drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    anchor: (f64, f64),
    pointer: (f64, f64),
}

/// Everything the window mutates in response to input.
#[derive(Debug, Clone)]
pub struct GuiAppState {
    config: ExplorerConfig,
    pub camera: Camera,
    pub colour_map_kind: PythagorasColourMapKinds,
    pub include_triangles: bool,
    pointer: (f64, f64),
    drag: Option<DragState>,
    pub latest_submitted_generation: u64,
    pub redraw_pending: bool,
    fullscreen: bool,
    /// The camera changed since the last submitted view.
    view_stale: bool,
    /// Set by the debug panel, consumed after the frame.
    pub reset_requested: bool,
}

impl GuiAppState {
    #[must_use]
    pub fn new(config: ExplorerConfig, width: u32, height: u32) -> Self {
        let camera = Self::initial_camera(&config, width, height);

        Self {
            colour_map_kind: config.colour_map,
            config,
            camera,
            include_triangles: false,
            pointer: (0.0, 0.0),
            drag: None,
            latest_submitted_generation: 0,
            redraw_pending: true,
            fullscreen: false,
            view_stale: true,
            reset_requested: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            include_triangles: self.include_triangles,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn begin_drag(&mut self, pointer: (f64, f64)) {
        self.drag = Some(DragState {
            anchor: pointer,
            pointer,
        });
    }

    pub fn track_pointer(&mut self, pointer: (f64, f64)) {
        self.pointer = pointer;
        if let Some(drag) = &mut self.drag {
            drag.pointer = pointer;
        }
    }

    /// Per-frame drift while dragging. Returns whether the camera moved.
    pub fn apply_drag(&mut self) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };

        let dx = drag.anchor.0 - drag.pointer.0;
        let dy = drag.anchor.1 - drag.pointer.1;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        self.camera.pan(dx, dy);
        true
    }

    /// Returns whether a drag was in progress, i.e. whether the view needs recomputing.
    pub fn end_drag(&mut self) -> bool {
        let dragged = self.drag.take().is_some();
        self.view_stale |= dragged;
        dragged
    }

    pub fn zoom(&mut self, delta: f64) -> bool {
        let zoomed = self.camera.zoom(delta);
        self.view_stale |= zoomed;
        zoomed
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.view_stale = true;
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Flips fullscreen and returns the new mode. The view is recomputed even
    /// if the window size ends up unchanged.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.view_stale = true;
        self.fullscreen
    }

    pub fn reset_view(&mut self) {
        self.camera = Self::initial_camera(&self.config, self.camera.width(), self.camera.height());
        self.drag = None;
        self.view_stale = true;
    }

    /// Returns whether a new view must be submitted, clearing the flag.
    pub fn take_stale_view(&mut self) -> bool {
        std::mem::take(&mut self.view_stale)
    }

    pub fn view_request(&self) -> Result<ViewRequest, ViewportError> {
        ViewRequest::from_camera(
            &self.camera,
            &self.config.depth_policy,
            self.config.near_margin,
        )
    }

    pub fn record_submission(&mut self, generation: u64) {
        self.latest_submitted_generation = generation;
        self.redraw_pending = true;
    }

    /// Frames the tree: the view is centred on the middle of the root square's
    /// top edge, lifted by one base size.
    fn initial_camera(config: &ExplorerConfig, width: u32, height: u32) -> Camera {
        let mut camera = Camera::new(width, height, config.initial_scale, config.camera_limits);
        let focus = Point::new(config.base_size / 2.0, config.base_size * 2.0);
        camera.set_center(Point::default() - focus);
        camera
    }
}
