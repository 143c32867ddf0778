use std::collections::HashMap;
use std::sync::Arc;

use crate::aggregate::AggregatorState;

/// Memoized [`AggregatorState::distribution_for`], keyed by snapshot version
/// and scenario name. Entries from other snapshots are never served.
#[derive(Debug, Default)]
pub struct DistributionCache {
    entries: HashMap<(u64, String), Arc<[f64]>>,
    hits: u64,
    misses: u64,
}

impl DistributionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, state: &AggregatorState, scenario_name: &str) -> Arc<[f64]> {
        let key = (state.version(), scenario_name.to_string());
        if let Some(found) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(found);
        }
        self.misses += 1;
        let computed: Arc<[f64]> = state.distribution_for(scenario_name).into();
        self.entries.insert(key, Arc::clone(&computed));
        computed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/cache.rs"]
mod tests;
