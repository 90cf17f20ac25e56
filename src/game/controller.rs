//! Turn state machine over a `Position`.

use serde::{Deserialize, Serialize};

use crate::core::{AnalysisMode, Convention, Edge, EdgeId, GameConfig, GameState, Phase, Player};
use crate::error::{HackenbushError, IllegalMoveReason, Result};
use crate::position::Position;
use crate::rules::{outcome, AnalysisStrategy, GameAnalysis};
use crate::search::AlphaBetaSearch;
use crate::valuation::ColonValuation;

/// What the renderer receives after load and after every move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub analysis: GameAnalysis,
}

/// A single game of Hackenbush.
///
/// Moves only ever remove edges, so the strategy chosen at load stays valid
/// for the whole game.
///
/// ```
/// use hackenbush::core::{Color, Edge, EdgeId, GameConfig, Player};
/// use hackenbush::game::Game;
///
/// let mut game = Game::new(
///     vec![
///         Edge::new("b", "ground", "a", Color::Blue),
///         Edge::new("r", "ground", "c", Color::Red),
///     ],
///     GameConfig::default(),
/// )
/// .unwrap();
///
/// game.play(&EdgeId::new("r"), Player::Red).unwrap();
/// let snapshot = game.play(&EdgeId::new("b"), Player::Blue).unwrap();
///
/// // Blue made the last move.
/// assert_eq!(snapshot.state.winner, Some(Player::Blue));
/// ```
pub struct Game {
    config: GameConfig,
    strategy: Box<dyn AnalysisStrategy>,
    position: Position,
    phase: Phase,
    last_mover: Option<Player>,
}

impl Game {
    /// Load a game from a list of edges.
    ///
    /// Fails with `InvalidPosition` for a malformed graph and with
    /// `InvalidConfig` when the analysis mode cannot handle the convention
    /// or the search settings are out of range.
    /// If the side to move is already decided by the terminal rule, the game
    /// starts in `GameOver`.
    pub fn new(edges: impl IntoIterator<Item = Edge>, config: GameConfig) -> Result<Self> {
        config.search.validate()?;
        let position = Position::new(edges)?;
        let strategy = select_strategy(&position, &config)?;

        let starting = config.starting_player;
        let phase = match outcome(&position, starting, None, config.convention) {
            Some(winner) => Phase::GameOver(winner),
            None => Phase::AwaitingMove(starting),
        };

        log::debug!(
            "loaded {} edges, {} play, {} strategy, {:?}",
            position.len(),
            config.convention,
            strategy.name(),
            phase
        );

        Ok(Self {
            config,
            strategy,
            position,
            phase,
            last_mover: None,
        })
    }

    /// Cut `edge_id` on behalf of `player`.
    ///
    /// On error the game is left exactly as it was.
    pub fn play(&mut self, edge_id: &EdgeId, player: Player) -> Result<Snapshot> {
        match self.phase {
            Phase::GameOver(_) => {
                return Err(HackenbushError::illegal(edge_id, IllegalMoveReason::GameOver));
            }
            Phase::AwaitingMove(expected) if expected != player => {
                return Err(HackenbushError::illegal(
                    edge_id,
                    IllegalMoveReason::OutOfTurn {
                        expected,
                        actual: player,
                    },
                ));
            }
            Phase::AwaitingMove(_) => {}
        }

        self.position = self.position.apply_move(edge_id, player)?;
        self.last_mover = Some(player);

        let next = player.opponent();
        self.phase = match outcome(&self.position, next, Some(player), self.config.convention) {
            Some(winner) => Phase::GameOver(winner),
            None => Phase::AwaitingMove(next),
        };

        log::debug!("{} cut {}, now {:?}", player, edge_id, self.phase);

        Ok(self.snapshot())
    }

    /// Whether the engine should make the next move.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.config.computer.is_some() && self.phase.to_move() == self.config.computer
    }

    /// Play the engine's move if it is the computer's turn.
    ///
    /// Cuts the strategy's recommended edge, or the first legal edge when the
    /// strategy has no recommendation. Returns `None` when it is not the
    /// computer's turn.
    pub fn play_computer_move(&mut self) -> Result<Option<Snapshot>> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(player) = self.phase.to_move() else {
            return Ok(None);
        };

        let recommended = self.strategy.analyze(&self.position, player).optimal_move;
        let Some(edge_id) =
            recommended.or_else(|| self.position.legal_moves(player).next().map(|e| e.id.clone()))
        else {
            return Ok(None);
        };

        self.play(&edge_id, player).map(Some)
    }

    /// Analysis for the player to move, or an empty analysis once the game
    /// is over.
    #[must_use]
    pub fn analysis(&self) -> GameAnalysis {
        match self.phase {
            Phase::AwaitingMove(player) => self.strategy.analyze(&self.position, player),
            Phase::GameOver(_) => GameAnalysis::default(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            analysis: self.analysis(),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        GameState::new(self.position.clone(), self.phase, self.last_mover)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        self.phase.to_move()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Edges the player to move may cut. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<EdgeId> {
        match self.phase {
            Phase::AwaitingMove(player) => self.position.legal_moves(player).map(|e| e.id.clone()).collect(),
            Phase::GameOver(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Name of the analysis strategy in use.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("phase", &self.phase)
            .field("last_mover", &self.last_mover)
            .field("active_edges", &self.position.total_active())
            .finish()
    }
}

fn select_strategy(position: &Position, config: &GameConfig) -> Result<Box<dyn AnalysisStrategy>> {
    let search = || -> Box<dyn AnalysisStrategy> {
        Box::new(AlphaBetaSearch::new(config.convention, config.search.clone()))
    };

    match (config.analysis, config.convention) {
        (AnalysisMode::Exact, Convention::Misere) => Err(HackenbushError::InvalidConfig(
            "exact valuation only supports normal play".to_string(),
        )),
        (AnalysisMode::Exact, Convention::Normal) => Ok(Box::new(ColonValuation)),
        (AnalysisMode::Search, _) => Ok(search()),
        (AnalysisMode::Auto, Convention::Normal) if !position.has_green() && !position.has_cycle() => {
            Ok(Box::new(ColonValuation))
        }
        (AnalysisMode::Auto, _) => Ok(search()),
    }
}
