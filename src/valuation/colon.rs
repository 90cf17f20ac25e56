//! Colon-Principle valuation and greedy move choice.

use crate::core::{Color, Edge, EdgeId, Player};
use crate::dyadic::{DyadicNumber, MAX_LEVEL};
use crate::position::Position;
use crate::rules::{AnalysisStrategy, GameAnalysis, Value};

/// Exact valuation for normal-play blue-red positions.
///
/// Each active blue edge at level `k` (one more than the ground distance of
/// its lower endpoint) is worth `+1/2^k`, each red edge `-1/2^k`; the
/// position value is the sum. Green edges are ignored entirely, including
/// for distances.
///
/// The sum is the true game value only for stalks. Other graphs get the same
/// formula as an approximation.
///
/// ```
/// use hackenbush::core::{Color, Edge};
/// use hackenbush::dyadic::DyadicNumber;
/// use hackenbush::position::Position;
/// use hackenbush::valuation::ColonValuation;
///
/// let position = Position::new(vec![
///     Edge::new("e1", "ground", "a", Color::Blue),
///     Edge::new("e2", "a", "b", Color::Red),
/// ])
/// .unwrap();
///
/// assert_eq!(ColonValuation.value(&position), DyadicNumber::new(1, 2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ColonValuation;

impl ColonValuation {
    /// Value of `position`: positive favors Blue, negative Red, zero means
    /// the player to move loses.
    #[must_use]
    pub fn value(&self, position: &Position) -> DyadicNumber {
        let distances = position.ground_distances_over(|e| e.color != Color::Green);

        position
            .active_edges()
            .filter_map(|edge| {
                let positive = edge.color.owner()?.is_maximizing();
                let lower = match (distances.get(&edge.a), distances.get(&edge.b)) {
                    (Some(&a), Some(&b)) => a.min(b),
                    (Some(&d), None) | (None, Some(&d)) => d,
                    (None, None) => return None,
                };
                let level = lower + 1;
                if level > MAX_LEVEL {
                    log::warn!("edge {} at level {} is too deep to value, skipped", edge.id, level);
                    return None;
                }
                Some(DyadicNumber::unit_fraction(positive, level))
            })
            .sum()
    }

    /// Value and recommended move for `mover`.
    ///
    /// One ply only: each of the mover's own-color edges is cut
    /// hypothetically and the resulting position valued.
    /// - favored mover: smallest margin that keeps the sign, else a move to
    ///   zero, else the smallest magnitude overall
    /// - unfavored mover (including value zero): smallest resulting
    ///   magnitude
    ///
    /// Ties go to the first edge in position order.
    #[must_use]
    pub fn analyze_for(&self, position: &Position, mover: Player) -> GameAnalysis {
        let current = self.value(position);
        let mover_sign = if mover.is_maximizing() { 1 } else { -1 };
        let favored = current.signum() == mover_sign;

        let candidates: Vec<(EdgeId, DyadicNumber)> = position
            .active_edges()
            .filter(|e| e.color == mover.color())
            .filter_map(|e: &Edge| {
                let next = position.apply_move(&e.id, mover).ok()?;
                Some((e.id.clone(), self.value(&next)))
            })
            .collect();

        if candidates.is_empty() {
            return GameAnalysis::no_moves(Value::Exact(current));
        }

        let closest = |sign: Option<i32>| {
            candidates
                .iter()
                .filter(|(_, v)| sign.map_or(true, |s| v.signum() == s))
                .min_by_key(|(_, v)| v.abs())
        };

        let choice = if favored {
            closest(Some(mover_sign))
                .or_else(|| closest(Some(0)))
                .or_else(|| closest(None))
        } else {
            closest(None)
        };

        if let Some((id, after)) = choice {
            log::debug!("{} to move at {}: cut {} (value after {})", mover, current, id, after);
        }

        GameAnalysis {
            value: Value::Exact(current),
            optimal_move: choice.map(|(id, _)| id.clone()),
            winning: favored,
        }
    }
}

impl AnalysisStrategy for ColonValuation {
    fn name(&self) -> &'static str {
        "colon"
    }

    fn analyze(&self, position: &Position, mover: Player) -> GameAnalysis {
        self.analyze_for(position, mover)
    }
}
