//! # hackenbush
//!
//! A Blue-Red-Green Hackenbush game engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: Every move returns a new `Position`; the old
//!    one stays valid. Clones are O(1) via `im-rs`, so search branches and
//!    caller-side undo history share structure.
//!
//! 2. **Eager Cascades**: An edge that loses its path to `ground` falls in
//!    the same move that cut it. No position at rest holds a floating edge.
//!
//! 3. **Exact Where Possible**: Normal-play blue-red positions are valued
//!    with exact dyadic arithmetic. Everything else (green edges, cycles,
//!    misère) goes through alpha-beta search.
//!
//! ## Modules
//!
//! - `core`: Players, colors, edges, configuration, game state
//! - `error`: Error type and `Result` alias
//! - `dyadic`: Exact numbers with power-of-two denominators
//! - `position`: Edge graph, ground reachability, move application
//! - `rules`: `AnalysisStrategy` trait and end-of-game rules
//! - `valuation`: Colon-Principle value and greedy move choice
//! - `search`: Alpha-beta search with statistics and node budget
//! - `game`: Turn state machine and computer opponent
//!
//! ## Example
//!
//! ```
//! use hackenbush::{Color, Edge, Game, GameConfig, Player};
//!
//! let edges = vec![
//!     Edge::new("e1", "ground", "a", Color::Blue),
//!     Edge::new("e2", "a", "b", Color::Red),
//!     Edge::new("e3", "ground", "c", Color::Red),
//! ];
//! let game = Game::new(edges, GameConfig::default()).unwrap();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.state.current_player, Some(Player::Red));
//! assert_eq!(snapshot.analysis.value.to_string(), "-1/2");
//! ```

pub mod core;
pub mod dyadic;
pub mod error;
pub mod game;
pub mod position;
pub mod rules;
pub mod search;
pub mod valuation;

// Re-export commonly used types
pub use crate::core::{
    AnalysisMode, Color, Convention, Edge, EdgeId, GameConfig, GameState, Phase, Player, VertexId, GROUND,
};

pub use crate::dyadic::DyadicNumber;

pub use crate::error::{HackenbushError, IllegalMoveReason, Result};

pub use crate::game::{Game, Snapshot};

pub use crate::position::Position;

pub use crate::rules::{AnalysisStrategy, GameAnalysis, Value};

pub use crate::search::{AlphaBetaSearch, SearchConfig, SearchStats};

pub use crate::valuation::ColonValuation;
