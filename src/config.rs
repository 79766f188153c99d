//! Tunables for the explorer. Binaries start from [`ExplorerConfig::default`]
//! and override fields from their flags before calling
//! [`ExplorerConfig::validate`].

use thiserror::Error;

use crate::core::camera::limits::CameraLimits;
use crate::core::data::colour::Colour;
use crate::core::data::viewport::DEFAULT_NEAR_MARGIN;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
use crate::core::fractals::pythagoras::expansion_plan::DepthPolicy;
use crate::core::fractals::pythagoras::iteration_cache::MAX_CACHED_DEPTH;

/// Incremental expansion never goes deeper than this, whatever the zoom.
pub const MAX_EXPANSION_DEPTH: u32 = 64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("base size must be positive and finite, got {0}")]
    BaseSize(f64),
    #[error("zoom reference must be positive and finite, got {0}")]
    ZoomReference(f64),
    #[error("initial scale must be positive and finite, got {0}")]
    InitialScale(f64),
    #[error("near margin must be non-negative and finite, got {0}")]
    NearMargin(f64),
    #[error("default depth {default_depth} exceeds the cacheable maximum {max}")]
    DefaultDepthTooLarge { default_depth: u32, max: u32 },
    #[error("default depth {default_depth} is deeper than max iteration {max_iteration}")]
    DepthOrder {
        default_depth: u32,
        max_iteration: u32,
    },
    #[error("max iteration {requested} exceeds {max}")]
    MaxIterationTooLarge { requested: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Side length of the root square.
    pub base_size: f64,
    pub depth_policy: DepthPolicy,
    pub near_margin: f64,
    /// Camera scale at startup: half the visible height in world units.
    pub initial_scale: f64,
    pub camera_limits: CameraLimits,
    pub background: Colour,
    pub colour_map: PythagorasColourMapKinds,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_size: 2000.0,
            depth_policy: DepthPolicy::default(),
            near_margin: DEFAULT_NEAR_MARGIN,
            initial_scale: 8000.0,
            camera_limits: CameraLimits::default(),
            background: Colour::WHEAT,
            colour_map: PythagorasColourMapKinds::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let policy = &self.depth_policy;

        if !positive(self.base_size) {
            return Err(ConfigError::BaseSize(self.base_size));
        }
        if !positive(policy.zoom_reference) {
            return Err(ConfigError::ZoomReference(policy.zoom_reference));
        }
        if !positive(self.initial_scale) {
            return Err(ConfigError::InitialScale(self.initial_scale));
        }
        if !(self.near_margin.is_finite() && self.near_margin >= 0.0) {
            return Err(ConfigError::NearMargin(self.near_margin));
        }
        if policy.default_depth > MAX_CACHED_DEPTH {
            return Err(ConfigError::DefaultDepthTooLarge {
                default_depth: policy.default_depth,
                max: MAX_CACHED_DEPTH,
            });
        }
        if policy.default_depth > policy.max_iteration {
            return Err(ConfigError::DepthOrder {
                default_depth: policy.default_depth,
                max_iteration: policy.max_iteration,
            });
        }
        if policy.max_iteration > MAX_EXPANSION_DEPTH {
            return Err(ConfigError::MaxIterationTooLarge {
                requested: policy.max_iteration,
                max: MAX_EXPANSION_DEPTH,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ExplorerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_base_size() {
        let config = ExplorerConfig {
            base_size: 0.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::BaseSize(0.0)));
    }

    #[test]
    fn rejects_default_depth_beyond_max_iteration() {
        let mut config = ExplorerConfig::default();
        config.depth_policy.default_depth = 10;
        config.depth_policy.max_iteration = 8;

        assert_eq!(
            config.validate(),
            Err(ConfigError::DepthOrder {
                default_depth: 10,
                max_iteration: 8
            })
        );
    }

    #[test]
    fn rejects_uncacheable_default_depth() {
        let mut config = ExplorerConfig::default();
        config.depth_policy.default_depth = MAX_CACHED_DEPTH + 1;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DefaultDepthTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_nan_margin() {
        let config = ExplorerConfig {
            near_margin: f64::NAN,
            ..ExplorerConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::NearMargin(_))));
    }
}
