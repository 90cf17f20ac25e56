//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{HackenbushError, Result};

use super::eval::INFINITY;

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched from the root, counting the root move itself.
    /// Positions reached at this depth are scored heuristically.
    pub max_depth: u32,

    /// Under misère play the heuristic flips sign once this many active
    /// edges or fewer remain. Empirical knob, not theory.
    pub misere_endgame_threshold: usize,

    /// Optional cap on visited nodes. Once spent, remaining nodes are scored
    /// heuristically as if at the depth limit. `None` = unbounded.
    pub max_nodes: Option<u64>,

    /// Magnitude of a decided-game score. Heuristic scores are clamped
    /// below it. Must lie in `2..i32::MAX`.
    pub win_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            misere_endgame_threshold: 8,
            max_nodes: None,
            win_score: 1000,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom misère endgame threshold.
    #[must_use]
    pub fn with_misere_endgame_threshold(mut self, edges: usize) -> Self {
        self.misere_endgame_threshold = edges;
        self
    }

    /// Create a new config with a node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Create a new config with a custom win score.
    #[must_use]
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }

    /// Check that a decided game always outranks a heuristic leaf and fits
    /// inside the search window.
    pub fn validate(&self) -> Result<()> {
        if self.win_score < 2 || self.win_score >= INFINITY {
            return Err(HackenbushError::InvalidConfig(format!(
                "win_score must be between 2 and {}, got {}",
                INFINITY - 1,
                self.win_score
            )));
        }
        Ok(())
    }
}
