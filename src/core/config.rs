//! Game configuration.
//!
//! Supplied once at game construction and immutable afterwards:
//! - `Convention`: who wins when moves run out
//! - `AnalysisMode`: which analysis strategy drives the game
//! - `GameConfig`: combines these with the starting player, search
//!   parameters, and the side played by the computer (if any)

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::search::SearchConfig;

/// End-of-game convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// The player who makes the last move wins.
    #[default]
    Normal,
    /// The player who makes the last move loses.
    Misere,
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Convention::Normal => write!(f, "normal"),
            Convention::Misere => write!(f, "misère"),
        }
    }
}

/// Which analysis strategy the controller uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Exact valuation for normal-play, green-free, acyclic positions;
    /// search otherwise.
    #[default]
    Auto,
    /// Always the Colon-Principle valuation. Normal convention only.
    Exact,
    /// Always alpha-beta search.
    Search,
}

/// Complete game configuration.
///
/// ```
/// use hackenbush::core::{Convention, GameConfig, Player};
///
/// let config = GameConfig::new()
///     .with_convention(Convention::Misere)
///     .with_starting_player(Player::Blue)
///     .with_computer(Player::Red);
///
/// assert_eq!(config.convention, Convention::Misere);
/// assert_eq!(config.computer, Some(Player::Red));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Normal or misère play.
    pub convention: Convention,

    /// Who moves first. Red by default.
    pub starting_player: Player,

    /// Analysis strategy selection.
    pub analysis: AnalysisMode,

    /// Parameters for the search strategy.
    pub search: SearchConfig,

    /// Side played by the engine. `None` for two human players.
    pub computer: Option<Player>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            convention: Convention::Normal,
            starting_player: Player::Red,
            analysis: AnalysisMode::Auto,
            search: SearchConfig::default(),
            computer: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convention.
    #[must_use]
    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Set the analysis mode.
    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisMode) -> Self {
        self.analysis = analysis;
        self
    }

    /// Set search parameters.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Let the engine play `player`.
    #[must_use]
    pub fn with_computer(mut self, player: Player) -> Self {
        self.computer = Some(player);
        self
    }

    /// The side a human plays against the computer ("player 1").
    #[must_use]
    pub fn human(&self) -> Option<Player> {
        self.computer.map(Player::opponent)
    }
}
