//! Analysis strategy trait and its output.
//!
//! The controller drives one `AnalysisStrategy`:
//! - `ColonValuation`: exact dyadic value, one-ply greedy move choice
//! - `AlphaBetaSearch`: depth-limited minimax for green edges, cycles, misère
//!
//! Both report a `GameAnalysis` for the player about to move.

use serde::{Deserialize, Serialize};

use crate::core::{EdgeId, Player};
use crate::dyadic::DyadicNumber;
use crate::position::Position;

/// Value attached to an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Exact game value from the Colon Principle.
    Exact(DyadicNumber),
    /// Search score; positive favors Blue.
    Score(i32),
}

impl Value {
    /// -1, 0 or 1; positive favors Blue.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self {
            Value::Exact(d) => d.signum(),
            Value::Score(s) => s.signum(),
        }
    }

    /// The player this value favors, `None` at zero.
    #[must_use]
    pub fn favors(&self) -> Option<Player> {
        match self.signum() {
            1 => Some(Player::Blue),
            -1 => Some(Player::Red),
            _ => None,
        }
    }

    /// Approximate decimal value, for display.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Exact(d) => d.to_f64(),
            Value::Score(s) => *s as f64,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Exact(DyadicNumber::zero())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Exact(d) => write!(f, "{}", d),
            Value::Score(s) => write!(f, "score {}", s),
        }
    }
}

/// Result of analysing a position for the player to move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAnalysis {
    pub value: Value,

    /// Edge the strategy recommends cutting, `None` if the mover has no move.
    pub optimal_move: Option<EdgeId>,

    /// Whether the mover is currently favored.
    pub winning: bool,
}

impl GameAnalysis {
    /// Analysis for a mover with nothing to cut.
    #[must_use]
    pub fn no_moves(value: Value) -> Self {
        Self {
            value,
            optimal_move: None,
            winning: false,
        }
    }
}

/// A way of analysing positions.
///
/// Implementations must be pure: the same position and mover always
/// produce the same analysis.
pub trait AnalysisStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Analyse `position` for `mover`, the player about to move.
    fn analyze(&self, position: &Position, mover: Player) -> GameAnalysis;
}
