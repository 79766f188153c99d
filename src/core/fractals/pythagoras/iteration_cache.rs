use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::compute_visible_units::ports::unit_generator::UnitGenerator;
use crate::core::data::geometric_unit::GeometricUnit;
use crate::core::data::point::Point;
use crate::core::fractals::pythagoras::errors::PythagorasError;
use crate::core::fractals::pythagoras::generator::PythagorasGenerator;

/// Deepest level [`IterationCache::get_depth_checked`] will materialize.
/// Level `d` holds `2^d` units, so this bounds the cache to ~2M units per level.
pub const MAX_CACHED_DEPTH: u32 = 21;

/// Memoized tree levels, indexed by depth.
///
/// Level 0 holds the root unit on the edge `(0, base)-(base, base)`; level `d`
/// holds `2^d` units, each parent's left child immediately followed by its
/// right child. Levels are append-only and never recomputed, so handing out
/// `Arc` slices is safe while other threads keep populating deeper levels.
pub struct IterationCache<G = PythagorasGenerator> {
    generator: G,
    base_size: f64,
    levels: RwLock<Vec<Arc<[GeometricUnit]>>>,
    populate: Mutex<()>,
}

impl<G: UnitGenerator> IterationCache<G> {
    #[must_use]
    pub fn new(generator: G, base_size: f64) -> Self {
        Self {
            generator,
            base_size,
            levels: RwLock::new(Vec::new()),
            populate: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    #[must_use]
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    /// Number of levels currently materialized.
    #[must_use]
    pub fn available_depths(&self) -> usize {
        self.levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns level `depth`, populating it (and every shallower level) first
    /// if needed. Repeated calls return the same allocation.
    ///
    /// Memory grows as `2^depth`; use [`Self::get_depth_checked`] for depths
    /// that come from outside the crate.
    pub fn get_depth(&self, depth: u32) -> Arc<[GeometricUnit]> {
        if let Some(level) = self.stored(depth) {
            return level;
        }

        // Single writer: a second caller blocks here and then finds the level.
        let _populating = self.populate.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            let next = {
                let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
                if let Some(level) = levels.get(depth as usize) {
                    return Arc::clone(level);
                }
                levels.len()
            };

            let level = self.build_level(next as u32);
            debug!(depth = next, units = level.len(), "populated cache level");

            self.levels
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(level);
        }
    }

    /// Validating entry point for signed depth requests.
    pub fn get_depth_checked(&self, depth: i64) -> Result<Arc<[GeometricUnit]>, PythagorasError> {
        if depth < 0 {
            return Err(PythagorasError::NegativeDepth { requested: depth });
        }

        if depth > i64::from(MAX_CACHED_DEPTH) {
            return Err(PythagorasError::DepthTooLarge {
                requested: depth,
                max: MAX_CACHED_DEPTH,
            });
        }

        Ok(self.get_depth(depth as u32))
    }

    /// Populates every level through `depth` without handing anything back.
    pub fn ensure_depth(&self, depth: u32) {
        let _ = self.get_depth(depth);
    }

    /// Levels `0..=depth` flattened in depth order: the part of the tree that
    /// is always drawn regardless of viewport.
    #[must_use]
    pub fn default_draw_list(&self, depth: u32) -> Vec<GeometricUnit> {
        self.ensure_depth(depth);

        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        let through = &levels[..=depth as usize];
        let total = through.iter().map(|level| level.len()).sum();

        let mut units = Vec::with_capacity(total);
        for level in through {
            units.extend_from_slice(level);
        }
        units
    }

    fn stored(&self, depth: u32) -> Option<Arc<[GeometricUnit]>> {
        self.levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(depth as usize)
            .map(Arc::clone)
    }

    fn build_level(&self, depth: u32) -> Arc<[GeometricUnit]> {
        if depth == 0 {
            let root = self.generator.generate(
                Point::new(0.0, self.base_size),
                Point::new(self.base_size, self.base_size),
                0,
            );
            return Arc::from([root]);
        }

        let parents = self
            .stored(depth - 1)
            .unwrap_or_else(|| self.build_level(depth - 1));

        parents
            .par_iter()
            .flat_map_iter(|parent| self.generator.children(parent))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::pythagoras::generator::test_support::CountingGenerator;
    use std::thread;

    fn cache() -> IterationCache {
        IterationCache::new(PythagorasGenerator, 1000.0)
    }

    #[test]
    fn level_sizes_double_with_depth() {
        let cache = cache();

        for depth in 0..=10u32 {
            assert_eq!(cache.get_depth(depth).len(), 1usize << depth);
        }
    }

    #[test]
    fn units_carry_their_level_depth() {
        let cache = cache();

        for depth in 0..=6u32 {
            assert!(cache.get_depth(depth).iter().all(|u| u.depth() == depth));
        }
    }

    #[test]
    fn root_sits_on_the_base_square() {
        let cache = cache();
        let root = cache.get_depth(0)[0];

        assert_eq!(root.triangle()[0], Point::new(0.0, 1000.0));
        assert_eq!(root.triangle()[1], Point::new(1000.0, 1000.0));
    }

    #[test]
    fn children_are_adjacent_left_then_right() {
        let cache = cache();
        let parents = cache.get_depth(3);
        let children = cache.get_depth(4);

        for (index, parent) in parents.iter().enumerate() {
            let expected = PythagorasGenerator.children(parent);
            assert_eq!(children[2 * index], expected[0]);
            assert_eq!(children[2 * index + 1], expected[1]);
        }
    }

    #[test]
    fn repeated_calls_do_not_regenerate() {
        let cache = IterationCache::new(CountingGenerator::default(), 1000.0);

        let first = cache.get_depth(5);
        let calls_after_first = cache.generator().calls();
        let second = cache.get_depth(5);

        assert_eq!(calls_after_first, (1 << 6) - 1);
        assert_eq!(cache.generator().calls(), calls_after_first);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn shallower_levels_reuse_populated_entries() {
        let cache = IterationCache::new(CountingGenerator::default(), 1000.0);

        cache.ensure_depth(4);
        let calls = cache.generator().calls();
        let _ = cache.get_depth(2);

        assert_eq!(cache.generator().calls(), calls);
        assert_eq!(cache.available_depths(), 5);
    }

    #[test]
    fn concurrent_population_expands_each_level_once() {
        let cache = Arc::new(IterationCache::new(CountingGenerator::default(), 1000.0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_depth(9).len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 512);
        }

        assert_eq!(cache.generator().calls(), (1 << 10) - 1);
    }

    #[test]
    fn ensure_depth_populates_through_requested_level() {
        let cache = cache();
        assert_eq!(cache.available_depths(), 0);

        cache.ensure_depth(3);

        assert_eq!(cache.available_depths(), 4);
    }

    #[test]
    fn default_draw_list_is_depth_ordered() {
        let cache = cache();
        let units = cache.default_draw_list(4);

        assert_eq!(units.len(), (1 << 5) - 1);
        assert!(units.windows(2).all(|w| w[0].depth() <= w[1].depth()));
        assert_eq!(units[0], cache.get_depth(0)[0]);
    }

    #[test]
    fn checked_depth_rejects_negative_requests() {
        let cache = cache();

        assert_eq!(
            cache.get_depth_checked(-1).unwrap_err(),
            PythagorasError::NegativeDepth { requested: -1 }
        );
        assert_eq!(cache.available_depths(), 0);
    }

    #[test]
    fn checked_depth_rejects_oversized_requests() {
        let cache = cache();
        let requested = i64::from(MAX_CACHED_DEPTH) + 1;

        assert_eq!(
            cache.get_depth_checked(requested).unwrap_err(),
            PythagorasError::DepthTooLarge {
                requested,
                max: MAX_CACHED_DEPTH
            }
        );
    }

    #[test]
    fn checked_depth_returns_level() {
        let cache = cache();

        assert_eq!(cache.get_depth_checked(3).unwrap().len(), 8);
    }
}
