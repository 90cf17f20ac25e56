//! Game controller.
//!
//! Owns the current position and the turn state machine:
//! - load a list of edges, pick an analysis strategy, check for a game that
//!   is already decided
//! - accept move requests from the player whose turn it is
//! - end the game under the configured convention
//! - optionally let the engine play one side
//!
//! After load and after every move the controller exposes a `Snapshot` for
//! the rendering side.

mod controller;

pub use controller::{Game, Snapshot};
