use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::compute_visible_units::ports::draw_list_sink::DrawListSink;
use crate::core::data::geometric_unit::GeometricUnit;

#[derive(Debug, Default)]
struct DrawListState {
    generation: u64,
    units: Vec<GeometricUnit>,
}

/// Units computed for the current view, shared between the worker and the
/// render loop.
///
/// Every append is stamped with the generation of the view that produced it
/// and is dropped unless that generation is still current. Since the check
/// and the append happen under one lock, readers only ever see an empty list
/// or a depth-ordered prefix of a single view's output.
#[derive(Debug, Default)]
pub struct DrawList {
    state: Mutex<DrawListState>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the list and makes `generation` current. Older generations
    /// are ignored so a late reset cannot resurrect a superseded view.
    pub fn reset(&self, generation: u64) {
        let mut state = self.lock();
        if generation < state.generation {
            return;
        }

        state.generation = generation;
        state.units.clear();
    }

    /// Appends `batch` if `generation` is current. Returns whether it was kept.
    pub fn publish(&self, generation: u64, batch: Vec<GeometricUnit>) -> bool {
        let mut state = self.lock();
        if state.generation != generation {
            return false;
        }

        state.units.extend(batch);
        true
    }

    /// Runs `f` against the current units while holding the lock. Keep `f` short;
    /// the worker blocks on publishing meanwhile.
    pub fn with_units<R>(&self, f: impl FnOnce(&[GeometricUnit]) -> R) -> R {
        f(&self.lock().units)
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<GeometricUnit> {
        self.with_units(<[GeometricUnit]>::to_vec)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn lock(&self) -> MutexGuard<'_, DrawListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sink bound to one generation of a shared [`DrawList`].
#[derive(Debug, Clone)]
pub struct DrawListWriter {
    list: Arc<DrawList>,
    generation: u64,
}

impl DrawListWriter {
    #[must_use]
    pub fn new(list: Arc<DrawList>, generation: u64) -> Self {
        Self { list, generation }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl DrawListSink for DrawListWriter {
    fn publish(&self, _depth: u32, batch: Vec<GeometricUnit>) -> Result<(), Cancelled> {
        if self.list.publish(self.generation, batch) {
            Ok(())
        } else {
            Err(Cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::fractals::pythagoras::generator::generate;

    fn unit(depth: u32) -> GeometricUnit {
        generate(Point::new(0.0, 0.0), Point::new(1.0, 0.0), depth)
    }

    #[test]
    fn test_publish_requires_current_generation() {
        let list = DrawList::new();
        list.reset(1);

        assert!(list.publish(1, vec![unit(1), unit(1)]));
        assert!(!list.publish(0, vec![unit(1)]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_reset_discards_previous_units() {
        let list = DrawList::new();
        list.reset(1);
        list.publish(1, vec![unit(1)]);

        list.reset(2);

        assert!(list.is_empty());
        assert_eq!(list.generation(), 2);
        assert!(!list.publish(1, vec![unit(2)]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let list = DrawList::new();
        list.reset(5);
        list.publish(5, vec![unit(3)]);

        list.reset(4);

        assert_eq!(list.generation(), 5);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_writer_reports_rejection_as_cancelled() {
        let list = Arc::new(DrawList::new());
        list.reset(1);
        let stale = DrawListWriter::new(Arc::clone(&list), 1);
        list.reset(2);
        let current = DrawListWriter::new(Arc::clone(&list), 2);

        assert_eq!(stale.publish(1, vec![unit(1)]), Err(Cancelled));
        assert_eq!(current.publish(1, vec![unit(1)]), Ok(()));
        assert_eq!(list.snapshot(), vec![unit(1)]);
    }
}
