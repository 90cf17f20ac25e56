//! Plain minimax without pruning.
//!
//! Same terminal rules, depth limit and leaf scoring as `AlphaBetaSearch`,
//! but visits every node. Used to check that pruning never changes the
//! chosen edge or its score; too slow for real play.

use crate::core::{Convention, EdgeId, Player};
use crate::position::Position;
use crate::rules::outcome;

use super::config::SearchConfig;
use super::eval::{heuristic, terminal_score};

/// Best root edge and its score for `mover`, or `None` if `mover` has no
/// legal move. Ties keep the first edge in position order.
///
/// `config.max_nodes` is ignored.
#[must_use]
pub fn minimax(
    position: &Position,
    mover: Player,
    convention: Convention,
    config: &SearchConfig,
) -> Option<(EdgeId, i32)> {
    let depth = config.max_depth.saturating_sub(1);
    let maximizing = mover.is_maximizing();
    let mut best: Option<(EdgeId, i32)> = None;

    for edge in position.legal_moves(mover) {
        let Ok(child) = position.apply_move(&edge.id, mover) else {
            continue;
        };
        let score = value(&child, mover.opponent(), Some(mover), depth, convention, config);
        let improves = match &best {
            None => true,
            Some((_, best_score)) if maximizing => score > *best_score,
            Some((_, best_score)) => score < *best_score,
        };
        if improves {
            best = Some((edge.id.clone(), score));
        }
    }

    best
}

fn value(
    position: &Position,
    to_move: Player,
    last_mover: Option<Player>,
    depth: u32,
    convention: Convention,
    config: &SearchConfig,
) -> i32 {
    if let Some(winner) = outcome(position, to_move, last_mover, convention) {
        return terminal_score(winner, config);
    }
    if depth == 0 {
        return heuristic(position, convention, config);
    }

    let scores = position.legal_moves(to_move).filter_map(|edge| {
        let child = position.apply_move(&edge.id, to_move).ok()?;
        Some(value(&child, to_move.opponent(), Some(to_move), depth - 1, convention, config))
    });

    let best = if to_move.is_maximizing() { scores.max() } else { scores.min() };
    best.unwrap_or_else(|| heuristic(position, convention, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Edge};

    #[test]
    fn test_minimax_single_edge() {
        let p = Position::new(vec![Edge::new("e1", "ground", "a", Color::Red)]).unwrap();
        let best = minimax(&p, Player::Red, Convention::Normal, &SearchConfig::default());
        assert_eq!(best, Some((EdgeId::new("e1"), -1000)));
    }

    #[test]
    fn test_minimax_no_moves() {
        let p = Position::new(vec![Edge::new("e1", "ground", "a", Color::Red)]).unwrap();
        let best = minimax(&p, Player::Blue, Convention::Normal, &SearchConfig::default());
        assert_eq!(best, None);
    }
}
