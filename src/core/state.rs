//! Controller-level game state.
//!
//! ## Phase
//!
//! The controller's state machine: either waiting for a specific player to
//! move, or finished with a winner.
//!
//! ## GameState
//!
//! Snapshot handed to the rendering side after load and after every move.
//! Cheap to produce because `Position` clones in O(1).

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::position::Position;

/// Controller state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// Game finished; no further moves are accepted.
    GameOver(Player),
}

impl Phase {
    /// The player to move, if the game is still running.
    #[must_use]
    pub const fn to_move(self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(player) => Some(player),
            Phase::GameOver(_) => None,
        }
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(_) => None,
            Phase::GameOver(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// Observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current position.
    pub position: Position,

    /// Player to move, `None` once the game is over.
    pub current_player: Option<Player>,

    pub game_over: bool,

    pub winner: Option<Player>,

    /// Player who made the most recent move, `None` before the first move.
    pub last_mover: Option<Player>,
}

impl GameState {
    /// Build a state from a position and controller phase.
    #[must_use]
    pub fn new(position: Position, phase: Phase, last_mover: Option<Player>) -> Self {
        Self {
            position,
            current_player: phase.to_move(),
            game_over: phase.is_over(),
            winner: phase.winner(),
            last_mover,
        }
    }
}
