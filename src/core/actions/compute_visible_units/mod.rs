pub mod compute_visible_units;
pub mod ports;

pub use compute_visible_units::{
    VisibilityJob, VisibilityReport, WorkerPhase, compute_visible_units,
};
