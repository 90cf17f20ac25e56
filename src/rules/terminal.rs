//! End-of-game rules for both conventions.
//!
//! A side is *exhausted* when it has no legal move: no active edge of its
//! color and no active green edge.
//!
//! - Normal: if the side to move is exhausted it loses. If both sides are
//!   exhausted, the previous mover made the last move and wins.
//! - Misère: if exactly one side is exhausted, that side wins at once. If
//!   both are exhausted, the previous mover made the last move and loses.

use crate::core::{Convention, Player};
use crate::position::Position;

/// The winner if the game is over, `None` if play continues.
///
/// `last_mover` is the player who produced `position`. Before the first move
/// it is `None`, and the opponent of `to_move` stands in for it.
#[must_use]
pub fn outcome(
    position: &Position,
    to_move: Player,
    last_mover: Option<Player>,
    convention: Convention,
) -> Option<Player> {
    let mover_out = !position.has_moves(to_move);
    let other_out = !position.has_moves(to_move.opponent());
    let previous = last_mover.unwrap_or(to_move.opponent());

    match convention {
        Convention::Normal => {
            if mover_out && other_out {
                Some(previous)
            } else if mover_out {
                Some(to_move.opponent())
            } else {
                None
            }
        }
        Convention::Misere => match (mover_out, other_out) {
            (true, true) => Some(previous.opponent()),
            (true, false) => Some(to_move),
            (false, true) => Some(to_move.opponent()),
            (false, false) => None,
        },
    }
}
