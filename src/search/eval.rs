//! Leaf scoring shared by alpha-beta and the reference minimax.

use crate::core::{Color, Convention, Player};
use crate::position::Position;

use super::config::SearchConfig;

/// Bound used for the initial search window.
pub const INFINITY: i32 = i32::MAX;

/// Score of a decided game: `+win_score` for Blue, `-win_score` for Red.
#[must_use]
pub fn terminal_score(winner: Player, config: &SearchConfig) -> i32 {
    match winner {
        Player::Blue => config.win_score,
        Player::Red => -config.win_score,
    }
}

/// Material count: active blue edges minus active red edges.
///
/// Under misère play the sign flips once few enough edges remain, a rough
/// stand-in for endgame parity. The result stays strictly inside
/// `±win_score` so no leaf outranks a decided game.
#[must_use]
pub fn heuristic(position: &Position, convention: Convention, config: &SearchConfig) -> i32 {
    let blue = position.active_count(Color::Blue) as i64;
    let red = position.active_count(Color::Red) as i64;
    let score = match convention {
        Convention::Normal => blue - red,
        Convention::Misere if position.total_active() <= config.misere_endgame_threshold => red - blue,
        Convention::Misere => blue - red,
    };
    let bound = i64::from(config.win_score.saturating_sub(1).max(0));
    score.clamp(-bound, bound) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Edge;

    fn position(blue: usize, red: usize) -> Position {
        let edges = (0..blue)
            .map(|i| Edge::new(format!("b{}", i), "ground", format!("vb{}", i), Color::Blue))
            .chain((0..red).map(|i| Edge::new(format!("r{}", i), "ground", format!("vr{}", i), Color::Red)));
        Position::new(edges).unwrap()
    }

    #[test]
    fn test_terminal_score() {
        let config = SearchConfig::default();
        assert_eq!(terminal_score(Player::Blue, &config), 1000);
        assert_eq!(terminal_score(Player::Red, &config), -1000);
    }

    #[test]
    fn test_heuristic_normal() {
        let config = SearchConfig::default();
        assert_eq!(heuristic(&position(3, 1), Convention::Normal, &config), 2);
        assert_eq!(heuristic(&position(1, 4), Convention::Normal, &config), -3);
    }

    #[test]
    fn test_heuristic_misere_endgame_flips() {
        let config = SearchConfig::default();
        assert_eq!(heuristic(&position(3, 1), Convention::Misere, &config), -2);
        // 10 edges is above the threshold of 8
        assert_eq!(heuristic(&position(6, 4), Convention::Misere, &config), 2);
    }

    #[test]
    fn test_heuristic_threshold_is_tunable() {
        let config = SearchConfig::default().with_misere_endgame_threshold(2);
        assert_eq!(heuristic(&position(3, 1), Convention::Misere, &config), 2);
    }

    #[test]
    fn test_heuristic_stays_below_win_score() {
        let config = SearchConfig::default().with_win_score(5);
        assert_eq!(heuristic(&position(9, 0), Convention::Normal, &config), 4);
        assert_eq!(heuristic(&position(0, 9), Convention::Normal, &config), -4);
        assert!(heuristic(&position(9, 0), Convention::Normal, &config) < terminal_score(Player::Blue, &config));
    }

    #[test]
    fn test_heuristic_ignores_green() {
        let p = Position::new(vec![
            Edge::new("g1", "ground", "a", Color::Green),
            Edge::new("g2", "ground", "b", Color::Green),
            Edge::new("b", "ground", "c", Color::Blue),
        ])
        .unwrap();
        assert_eq!(heuristic(&p, Convention::Normal, &SearchConfig::default()), 1);
    }
}
