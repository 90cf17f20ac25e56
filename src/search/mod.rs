//! Adversarial search engine.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over `Position`s. Unlike the
//! exact valuation it handles:
//!
//! - **Green edges**: playable by either side
//! - **Cyclic graphs**: no stalk decomposition needed
//! - **Misère play**: terminal rules and leaf scoring follow the convention
//!
//! Leaves are scored by material count (blue minus red), with the sign
//! flipped in misère endgames and the magnitude capped at `win_score - 1`.
//! Decided games score `±win_score`.
//!
//! ## Usage
//!
//! ```rust
//! use hackenbush::core::{Color, Convention, Edge, Player};
//! use hackenbush::position::Position;
//! use hackenbush::search::{AlphaBetaSearch, SearchConfig};
//!
//! let position = Position::new(vec![
//!     Edge::new("e1", "ground", "a", Color::Blue),
//!     Edge::new("e2", "a", "ground", Color::Red),
//!     Edge::new("e3", "a", "b", Color::Green),
//! ])
//! .unwrap();
//!
//! let search = AlphaBetaSearch::new(Convention::Misere, SearchConfig::default().with_max_depth(6));
//! let outcome = search.search(&position, Player::Red);
//!
//! println!("best: {:?} ({} nodes)", outcome.analysis.optimal_move, outcome.stats.nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod minimax;
pub mod stats;

pub use alphabeta::{AlphaBetaSearch, SearchOutcome};
pub use config::SearchConfig;
pub use eval::{heuristic, terminal_score};
pub use minimax::minimax;
pub use stats::SearchStats;
