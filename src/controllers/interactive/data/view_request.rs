use crate::core::camera::camera::Camera;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::pythagoras::expansion_plan::{DepthPolicy, ExpansionPlan};

/// Everything the worker needs for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRequest {
    pub viewport: Viewport,
    pub plan: ExpansionPlan,
}

impl ViewRequest {
    #[must_use]
    pub fn new(viewport: Viewport, plan: ExpansionPlan) -> Self {
        Self { viewport, plan }
    }

    /// Viewport and target depth as seen from `camera` right now.
    pub fn from_camera(
        camera: &Camera,
        policy: &DepthPolicy,
        near_margin: f64,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            viewport: camera.viewport()?,
            plan: policy.plan(camera.scale(), near_margin),
        })
    }
}
