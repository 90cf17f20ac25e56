//! Depth-limited minimax with alpha-beta pruning.
//!
//! Blue is always the maximizing side. Every node first checks the terminal
//! rule of the configured convention, then the depth limit and node budget,
//! and only then expands the legal moves of the side to move (own color and
//! green, in position order).

use std::time::Instant;

use crate::core::{Convention, EdgeId, Player};
use crate::position::Position;
use crate::rules::{outcome, AnalysisStrategy, GameAnalysis, Value};

use super::config::SearchConfig;
use super::eval::{heuristic, terminal_score, INFINITY};
use super::stats::SearchStats;

/// Result of a search: the analysis plus how it was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub analysis: GameAnalysis,
    pub stats: SearchStats,
}

/// Alpha-beta search strategy.
///
/// Handles everything the exact valuation cannot: green edges, cycles and
/// misère play. Exponential in the branching factor up to `max_depth`; the
/// caller bounds cost through graph size, depth, or `max_nodes`.
///
/// ```
/// use hackenbush::core::{Color, Convention, Edge, EdgeId, Player};
/// use hackenbush::position::Position;
/// use hackenbush::search::{AlphaBetaSearch, SearchConfig};
///
/// let position = Position::new(vec![
///     Edge::new("g", "ground", "a", Color::Green),
///     Edge::new("r", "a", "b", Color::Red),
/// ])
/// .unwrap();
///
/// let search = AlphaBetaSearch::new(Convention::Normal, SearchConfig::default());
/// let outcome = search.search(&position, Player::Blue);
///
/// // Cutting the green trunk leaves Red nothing to play.
/// assert_eq!(outcome.analysis.optimal_move, Some(EdgeId::new("g")));
/// assert!(outcome.analysis.winning);
/// ```
#[derive(Clone, Debug)]
pub struct AlphaBetaSearch {
    convention: Convention,
    config: SearchConfig,
}

impl AlphaBetaSearch {
    /// Create a search for the given convention.
    pub fn new(convention: Convention, config: SearchConfig) -> Self {
        Self { convention, config }
    }

    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `position` for `mover`.
    ///
    /// The root maximizes for Blue and minimizes for Red; ties keep the
    /// first edge in position order. A mover with no legal move gets
    /// `optimal_move = None` and `winning = false` without any search.
    pub fn search(&self, position: &Position, mover: Player) -> SearchOutcome {
        let start = Instant::now();
        let mut stats = SearchStats::new();

        let candidates: Vec<EdgeId> = position.legal_moves(mover).map(|e| e.id.clone()).collect();
        if candidates.is_empty() {
            let score = heuristic(position, self.convention, &self.config);
            return SearchOutcome {
                analysis: GameAnalysis::no_moves(Value::Score(score)),
                stats,
            };
        }

        let maximizing = mover.is_maximizing();
        let depth = self.config.max_depth.saturating_sub(1);
        let (mut alpha, mut beta) = (-INFINITY, INFINITY);
        let mut best: Option<(EdgeId, i32)> = None;

        for id in candidates {
            let Ok(child) = position.apply_move(&id, mover) else {
                continue;
            };
            let score = self.alphabeta(&child, mover.opponent(), Some(mover), depth, alpha, beta, &mut stats);

            let improves = match &best {
                None => true,
                Some((_, best_score)) if maximizing => score > *best_score,
                Some((_, best_score)) => score < *best_score,
            };
            if improves {
                best = Some((id, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        stats.time_us = start.elapsed().as_micros() as u64;

        let analysis = match best {
            Some((id, score)) => {
                log::debug!(
                    "{} search for {}: cut {} (score {}, {} nodes, {} cutoffs)",
                    self.convention,
                    mover,
                    id,
                    score,
                    stats.nodes,
                    stats.cutoffs
                );
                GameAnalysis {
                    value: Value::Score(score),
                    optimal_move: Some(id),
                    winning: if maximizing { score > 0 } else { score < 0 },
                }
            }
            None => GameAnalysis::no_moves(Value::Score(heuristic(position, self.convention, &self.config))),
        };

        SearchOutcome { analysis, stats }
    }

    fn budget_spent(&self, stats: &SearchStats) -> bool {
        self.config.max_nodes.is_some_and(|max| stats.nodes > max)
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &self,
        position: &Position,
        to_move: Player,
        last_mover: Option<Player>,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if let Some(winner) = outcome(position, to_move, last_mover, self.convention) {
            stats.terminals += 1;
            return terminal_score(winner, &self.config);
        }

        if depth == 0 || self.budget_spent(stats) {
            if depth > 0 {
                stats.budget_exhausted = true;
            }
            stats.leaves += 1;
            return heuristic(position, self.convention, &self.config);
        }

        let maximizing = to_move.is_maximizing();
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for edge in position.legal_moves(to_move) {
            let Ok(child) = position.apply_move(&edge.id, to_move) else {
                continue;
            };
            let score = self.alphabeta(&child, to_move.opponent(), Some(to_move), depth - 1, alpha, beta, stats);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                stats.cutoffs += 1;
                log::trace!("cutoff after {} at depth {} ({} <= {})", edge.id, depth, beta, alpha);
                break;
            }
        }

        best
    }
}

impl AnalysisStrategy for AlphaBetaSearch {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn analyze(&self, position: &Position, mover: Player) -> GameAnalysis {
        self.search(position, mover).analysis
    }
}
