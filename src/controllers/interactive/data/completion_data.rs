use std::time::Duration;

use crate::core::actions::compute_visible_units::compute_visible_units::VisibilityReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionData {
    pub generation: u64,
    pub report: VisibilityReport,
    pub compute_duration: Duration,
}
