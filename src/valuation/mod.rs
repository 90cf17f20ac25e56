//! Exact valuation engine (normal play, blue-red edges).
//!
//! Values positions with the Colon Principle and picks moves by a one-ply
//! greedy rule. Not a game-tree search: the recommended move is a heuristic,
//! and on graphs that are not stalks the value itself is an approximation.

pub mod colon;

pub use colon::ColonValuation;
