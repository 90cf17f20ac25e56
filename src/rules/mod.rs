//! Shared game rules and the analysis seam.
//!
//! - `engine`: `AnalysisStrategy` trait, `GameAnalysis`, `Value`
//! - `terminal`: normal and misère end-of-game rules
//!
//! The controller and the search engine both call `terminal::outcome`, so a
//! game ends under exactly the rule the search plans against.

pub mod engine;
pub mod terminal;

pub use engine::{AnalysisStrategy, GameAnalysis, Value};
pub use terminal::outcome;
