//! Core engine types: players, colors, edges, configuration, state.
//!
//! These are the shared vocabulary of every other module. Nothing in here
//! knows how positions are valued or searched.

pub mod player;
pub mod edge;
pub mod config;
pub mod state;

pub use player::{Color, ParseColorError, Player};
pub use edge::{Edge, EdgeId, VertexId, GROUND};
pub use config::{AnalysisMode, Convention, GameConfig};
pub use state::{GameState, Phase};
