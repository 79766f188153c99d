use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_visible_units::ports::draw_list_sink::DrawListSink;
use crate::core::actions::compute_visible_units::ports::unit_generator::UnitGenerator;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::pythagoras::expansion_plan::ExpansionPlan;
use crate::core::fractals::pythagoras::iteration_cache::IterationCache;

/// Where a visibility job currently is. Every run ends in `Idle`, including
/// cancelled ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerPhase {
    #[default]
    Idle,
    Seeding,
    Expanding(u32),
    Publishing(u32),
}

impl fmt::Display for WorkerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Seeding => write!(f, "seeding"),
            Self::Expanding(depth) => write!(f, "expanding depth {depth}"),
            Self::Publishing(depth) => write!(f, "publishing depth {depth}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityReport {
    /// Default-depth units that passed the near test.
    pub seeds: usize,
    /// Units handed to the sink across all batches.
    pub published: usize,
    pub batches: usize,
    /// Depth of the last published batch, if any.
    pub deepest_depth: Option<u32>,
}

/// One viewport's worth of incremental expansion beyond the cached levels.
///
/// Seeds are the cached units at `plan.default_depth` with any square corner
/// near the viewport. Each following depth expands only the previous depth's
/// visible units, keeps the children with a corner strictly inside the
/// viewport, and publishes them before moving on. Subtrees that leave the
/// viewport are never expanded again.
pub struct VisibilityJob<'a, G: UnitGenerator> {
    cache: &'a IterationCache<G>,
    viewport: Viewport,
    plan: ExpansionPlan,
}

impl<'a, G: UnitGenerator> VisibilityJob<'a, G> {
    #[must_use]
    pub fn new(cache: &'a IterationCache<G>, viewport: Viewport, plan: ExpansionPlan) -> Self {
        Self {
            cache,
            viewport,
            plan,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plan(&self) -> ExpansionPlan {
        self.plan
    }

    /// Runs the job to completion or until `cancel` fires between depths.
    ///
    /// `on_phase` observes every transition and always receives a final
    /// `Idle`. A sink rejecting a batch is treated as cancellation.
    pub fn run<C, S, P>(&self, cancel: &C, sink: &S, on_phase: P) -> Result<VisibilityReport, Cancelled>
    where
        C: CancelToken + ?Sized,
        S: DrawListSink + ?Sized,
        P: Fn(WorkerPhase),
    {
        let result = self.expand(cancel, sink, &on_phase);
        on_phase(WorkerPhase::Idle);

        match &result {
            Ok(report) => debug!(
                seeds = report.seeds,
                published = report.published,
                batches = report.batches,
                "visibility job finished"
            ),
            Err(_) => debug!("visibility job cancelled"),
        }

        result
    }

    fn expand<C, S, P>(&self, cancel: &C, sink: &S, on_phase: &P) -> Result<VisibilityReport, Cancelled>
    where
        C: CancelToken + ?Sized,
        S: DrawListSink + ?Sized,
        P: Fn(WorkerPhase),
    {
        cancel.check()?;
        on_phase(WorkerPhase::Seeding);

        let mut seeds = self.seed();
        let mut report = VisibilityReport {
            seeds: seeds.len(),
            ..VisibilityReport::default()
        };
        trace!(seeds = seeds.len(), "seeded visibility job");

        for depth in self.plan.expansion_depths() {
            cancel.check()?;
            on_phase(WorkerPhase::Expanding(depth));

            let batch = self.visible_children(&seeds);
            if batch.is_empty() {
                break;
            }

            cancel.check()?;
            on_phase(WorkerPhase::Publishing(depth));

            report.published += batch.len();
            report.batches += 1;
            report.deepest_depth = Some(depth);
            trace!(depth, units = batch.len(), "publishing visible batch");

            sink.publish(depth, batch.clone())?;
            seeds = batch;
        }

        Ok(report)
    }

    fn seed(&self) -> Vec<GeometricUnit> {
        let level = self.cache.get_depth(self.plan.default_depth);
        let margin = self.plan.near_margin;

        level
            .par_iter()
            .filter(|unit| {
                unit.square_corners()
                    .any(|corner| self.viewport.is_near(*corner, margin))
            })
            .copied()
            .collect()
    }

    fn visible_children(&self, parents: &[GeometricUnit]) -> Vec<GeometricUnit> {
        let generator = self.cache.generator();

        parents
            .par_iter()
            .flat_map_iter(|parent| generator.children(parent))
            .filter(|child| self.viewport.contains_any(child.square_corners()))
            .collect()
    }
}

/// Runs one job without observing phases.
pub fn compute_visible_units<G, C, S>(
    cache: &IterationCache<G>,
    viewport: Viewport,
    plan: ExpansionPlan,
    cancel: &C,
    sink: &S,
) -> Result<VisibilityReport, Cancelled>
where
    G: UnitGenerator,
    C: CancelToken + ?Sized,
    S: DrawListSink + ?Sized,
{
    VisibilityJob::new(cache, viewport, plan).run(cancel, sink, |_| {})
}
