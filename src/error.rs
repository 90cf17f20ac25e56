//! Error types for the engine.
//!
//! `IllegalMove` is recoverable: the caller drops the attempted move and the
//! game continues unchanged. `InvalidPosition` and `InvalidConfig` are raised
//! while constructing a game, before any move is accepted.

use thiserror::Error;

use crate::core::{Color, EdgeId, Player};

/// Why a move request was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No edge with this id exists.
    UnknownEdge,
    /// The edge was already cut or has fallen off.
    InactiveEdge,
    /// The edge's color is not playable by the mover.
    WrongColor { color: Color, player: Player },
    /// It is not this player's turn.
    OutOfTurn { expected: Player, actual: Player },
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::UnknownEdge => write!(f, "edge does not exist"),
            IllegalMoveReason::InactiveEdge => write!(f, "edge is no longer active"),
            IllegalMoveReason::WrongColor { color, player } => {
                write!(f, "{} cannot cut a {} edge", player, color)
            }
            IllegalMoveReason::OutOfTurn { expected, actual } => {
                write!(f, "it is {}'s turn, not {}'s", expected, actual)
            }
            IllegalMoveReason::GameOver => write!(f, "the game is over"),
        }
    }
}

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HackenbushError {
    #[error("illegal move on edge '{edge}': {reason}")]
    IllegalMove {
        edge: EdgeId,
        reason: IllegalMoveReason,
    },

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HackenbushError {
    pub(crate) fn illegal(edge: &EdgeId, reason: IllegalMoveReason) -> Self {
        Self::IllegalMove {
            edge: edge.clone(),
            reason,
        }
    }

    /// Whether the caller can simply ignore this error and keep playing.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IllegalMove { .. })
    }

    /// Whether this is a click on an edge that is already gone.
    ///
    /// Such requests must be treated as no-ops, never resubmitted.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::IllegalMove {
                reason: IllegalMoveReason::InactiveEdge,
                ..
            }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HackenbushError>;
