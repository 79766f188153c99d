use crate::controllers::interactive::data::batch_data::BatchData;
use crate::controllers::interactive::data::completion_data::CompletionData;
use crate::controllers::interactive::data::draw_list::{DrawList, DrawListWriter};
use crate::controllers::interactive::data::view_request::ViewRequest;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::compute_visible_units::compute_visible_units::{
    VisibilityJob, WorkerPhase,
};
use crate::core::actions::compute_visible_units::ports::draw_list_sink::DrawListSink;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::fractals::pythagoras::iteration_cache::IterationCache;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct SharedState {
    cache: Arc<IterationCache>,
    draw_list: Arc<DrawList>,
    generation: AtomicU64,
    last_completed_generation: Mutex<u64>,
    completed: Condvar,
    latest_request: Mutex<Option<(u64, ViewRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    phase: Mutex<WorkerPhase>,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        cache: Arc<IterationCache>,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            cache,
            draw_list: Arc::new(DrawList::new()),
            generation: AtomicU64::new(0),
            last_completed_generation: Mutex::new(0),
            completed: Condvar::new(),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            phase: Mutex::new(WorkerPhase::Idle),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Supersedes whatever view is in flight. The draw list is cleared before
    /// this returns, so the next frame never mixes the old view with the new.
    pub fn submit_view(&self, request: ViewRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.shared.draw_list.reset(generation);

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if guard.as_ref().is_none_or(|(pending, _)| *pending < generation) {
                *guard = Some((generation, request));
            }
        }

        self.shared.wake.notify_one();

        debug!(
            generation,
            default_depth = request.plan.default_depth,
            target_depth = request.plan.target_depth,
            "submitted view"
        );

        generation
    }

    /// Blocks until `generation` (or a later one) has completed, or the
    /// timeout passes. Returns whether it completed.
    pub fn wait_for_generation(&self, generation: u64, timeout: Duration) -> bool {
        let guard = self
            .shared
            .last_completed_generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let (guard, _) = self
            .shared
            .completed
            .wait_timeout_while(guard, timeout, |done| *done < generation)
            .unwrap_or_else(PoisonError::into_inner);

        *guard >= generation
    }

    /// Waits for the most recently submitted view. Trivially true before any
    /// submission.
    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        self.wait_for_generation(self.latest_generation(), timeout)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }

        self.shared.completed.notify_all();
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        *self
            .shared
            .last_completed_generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn phase(&self) -> WorkerPhase {
        *self
            .shared
            .phase
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn draw_list(&self) -> &Arc<DrawList> {
        &self.shared.draw_list
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<IterationCache> {
        &self.shared.cache
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let sink = NotifyingSink {
                writer: DrawListWriter::new(Arc::clone(&shared.draw_list), job_generation),
                presenter_port: shared.presenter_port.as_ref(),
            };

            let job = VisibilityJob::new(&*shared.cache, request.viewport, request.plan);

            let start = Instant::now();
            let result = job.run(&cancel_token, &sink, |phase| {
                *shared.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
            });
            let compute_duration = start.elapsed();

            match result {
                Ok(report) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    info!(
                        generation = job_generation,
                        seeds = report.seeds,
                        published = report.published,
                        elapsed_ms = compute_duration.as_millis() as u64,
                        "view complete"
                    );

                    shared
                        .presenter_port
                        .present(RenderEvent::Completed(CompletionData {
                            generation: job_generation,
                            report,
                            compute_duration,
                        }));

                    *shared
                        .last_completed_generation
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner) = job_generation;
                    shared.completed.notify_all();
                }
                Err(Cancelled) => {
                    debug!(generation = job_generation, "view superseded");
                }
            }
        }
    }
}

/// Writes into the draw list and tells the presenter a redraw is worthwhile.
struct NotifyingSink<'a> {
    writer: DrawListWriter,
    presenter_port: &'a dyn InteractiveControllerPresenterPort,
}

impl DrawListSink for NotifyingSink<'_> {
    fn publish(&self, depth: u32, batch: Vec<GeometricUnit>) -> Result<(), Cancelled> {
        let units = batch.len();
        self.writer.publish(depth, batch)?;

        self.presenter_port.present(RenderEvent::Batch(BatchData {
            generation: self.writer.generation(),
            depth,
            units,
        }));

        Ok(())
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
