use crate::core::actions::cancellation::Cancelled;
use crate::core::data::geometric_unit::GeometricUnit;

/// Receives each depth's visible batch as soon as it is computed.
pub trait DrawListSink: Send + Sync {
    /// Appends `batch`. Returns `Err(Cancelled)` when the sink no longer
    /// accepts output from this job; the batch is then discarded.
    fn publish(&self, depth: u32, batch: Vec<GeometricUnit>) -> Result<(), Cancelled>;
}
