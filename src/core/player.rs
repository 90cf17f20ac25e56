//! Players and edge colors.
//!
//! ## Player
//!
//! The two sides of the game. Blue is the maximizing side for search and the
//! side favored by positive values.
//!
//! ## Color
//!
//! Closed three-way edge color. Green edges are "pass" edges either side may
//! cut. Every decision point matches on `Color` exhaustively, so adding a
//! color is a compile error everywhere it matters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Both players, Blue first.
    pub const ALL: [Player; 2] = [Player::Blue, Player::Red];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The edge color this player owns.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Player::Red => Color::Red,
            Player::Blue => Color::Blue,
        }
    }

    /// Whether this is the maximizing (Blue) side.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::Blue)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Blue => write!(f, "blue"),
        }
    }
}

/// Edge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    /// Cuttable by either player.
    Green,
}

impl Color {
    /// Check whether `player` may cut an edge of this color.
    #[must_use]
    pub const fn playable_by(self, player: Player) -> bool {
        match self {
            Color::Red => matches!(player, Player::Red),
            Color::Blue => matches!(player, Player::Blue),
            Color::Green => true,
        }
    }

    /// The player owning this color, `None` for green.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Color::Red => Some(Player::Red),
            Color::Blue => Some(Player::Blue),
            Color::Green => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge color '{0}' (expected red, blue, or green)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent().opponent(), Player::Red);
    }

    #[test]
    fn test_player_color() {
        assert_eq!(Player::Red.color(), Color::Red);
        assert_eq!(Player::Blue.color(), Color::Blue);
        assert!(Player::Blue.is_maximizing());
        assert!(!Player::Red.is_maximizing());
    }

    #[test]
    fn test_playable_by() {
        assert!(Color::Red.playable_by(Player::Red));
        assert!(!Color::Red.playable_by(Player::Blue));
        assert!(Color::Blue.playable_by(Player::Blue));
        assert!(!Color::Blue.playable_by(Player::Red));
        assert!(Color::Green.playable_by(Player::Red));
        assert!(Color::Green.playable_by(Player::Blue));
    }

    #[test]
    fn test_owner() {
        assert_eq!(Color::Red.owner(), Some(Player::Red));
        assert_eq!(Color::Blue.owner(), Some(Player::Blue));
        assert_eq!(Color::Green.owner(), None);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!(" Blue ".parse::<Color>(), Ok(Color::Blue));
        assert_eq!("GREEN".parse::<Color>(), Ok(Color::Green));
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Red), "red");
        assert_eq!(format!("{}", Color::Green), "green");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let deserialized: Player = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(deserialized, Player::Red);
    }
}
