use std::ops::RangeInclusive;

/// Zoom-to-depth policy. The numbers are tuning, only the clamp is a contract:
/// the target never drops below `default_depth` nor exceeds `max_iteration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPolicy {
    /// Deepest level served from the cache and always drawn.
    pub default_depth: u32,
    /// Hard upper bound on incremental expansion.
    pub max_iteration: u32,
    pub base_iterations: u32,
    pub zoom_reference: f64,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            default_depth: 14,
            max_iteration: 32,
            base_iterations: 12,
            zoom_reference: 2000.0,
        }
    }
}

impl DepthPolicy {
    /// `clamp(base_iterations + round(zoom_reference / scale), default_depth, max_iteration)`.
    ///
    /// Non-positive or non-finite scales are treated as the smallest positive
    /// scale, which pins the result to `max_iteration`.
    #[must_use]
    pub fn target_depth(&self, scale: f64) -> u32 {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            f64::MIN_POSITIVE
        };

        let raw = f64::from(self.base_iterations) + (self.zoom_reference / scale).round();
        let upper = self.max_iteration.max(self.default_depth);

        raw.clamp(f64::from(self.default_depth), f64::from(upper)) as u32
    }

    #[must_use]
    pub fn plan(&self, scale: f64, near_margin: f64) -> ExpansionPlan {
        ExpansionPlan {
            default_depth: self.default_depth,
            target_depth: self.target_depth(scale),
            near_margin,
        }
    }
}

/// What one visibility job does: seed from `default_depth`, expand to `target_depth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionPlan {
    pub default_depth: u32,
    pub target_depth: u32,
    pub near_margin: f64,
}

impl ExpansionPlan {
    /// Depths produced beyond the cache; empty when the target is the default.
    #[must_use]
    pub fn expansion_depths(&self) -> RangeInclusive<u32> {
        (self.default_depth + 1)..=self.target_depth
    }
}
