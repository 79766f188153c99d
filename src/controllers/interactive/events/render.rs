use crate::controllers::interactive::data::batch_data::BatchData;
use crate::controllers::interactive::data::completion_data::CompletionData;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// More units are ready in the draw list; a redraw will show them.
    Batch(BatchData),
    /// The worker finished the view without being superseded.
    Completed(CompletionData),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Batch(batch) => batch.generation,
            Self::Completed(completion) => completion.generation,
        }
    }
}
