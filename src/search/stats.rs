//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited below the root.
    pub nodes: u64,

    /// Nodes scored by the heuristic (depth limit or budget).
    pub leaves: u64,

    /// Nodes decided by a terminal rule.
    pub terminals: u64,

    /// Beta cutoffs taken.
    pub cutoffs: u64,

    /// Whether the node budget ran out before the depth limit.
    pub budget_exhausted: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
        assert!(!stats.budget_exhausted);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.budget_exhausted = true;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
