//! Shared proptest generators for integration tests.

#![allow(dead_code)]

use hackenbush::core::{Color, Edge, Player};
use hackenbush::position::Position;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

pub fn arb_color() -> impl Strategy<Value = Color> + Clone {
    prop_oneof![Just(Color::Red), Just(Color::Blue), Just(Color::Green)]
}

pub fn arb_blue_red() -> impl Strategy<Value = Color> + Clone {
    prop_oneof![Just(Color::Red), Just(Color::Blue)]
}

fn vertex(index: usize) -> String {
    if index == 0 {
        "ground".to_string()
    } else {
        format!("v{}", index)
    }
}

/// Random connected edge lists.
///
/// Vertex `i` hangs from some earlier vertex (0 is ground), so the spanning
/// edges alone reach every vertex. Extra edges then add cycles, parallel
/// edges and self-loops.
pub fn arb_edges(
    colors: impl Strategy<Value = Color> + Clone + 'static,
    max_vertices: usize,
    max_extra: usize,
) -> impl Strategy<Value = Vec<Edge>> {
    (1..=max_vertices)
        .prop_flat_map(move |n| {
            let spanning: Vec<_> = (1..=n).map(|v| (0..v, colors.clone())).collect();
            let extra = prop::collection::vec((0..=n, 0..=n, colors.clone()), 0..=max_extra);
            (spanning, extra)
        })
        .prop_map(|(spanning, extra)| {
            let spanning = spanning
                .into_iter()
                .enumerate()
                .map(|(i, (parent, color))| (parent, i + 1, color));
            spanning
                .chain(extra)
                .enumerate()
                .map(|(i, (a, b, color))| Edge::new(format!("e{}", i), vertex(a), vertex(b), color))
                .collect()
        })
}

pub fn arb_position(max_vertices: usize, max_extra: usize) -> impl Strategy<Value = Position> {
    arb_edges(arb_color(), max_vertices, max_extra).prop_map(|edges| Position::new(edges).unwrap())
}

/// Vertices reachable from ground, by repeated relaxation rather than BFS.
pub fn reachable(position: &Position) -> FxHashSet<String> {
    let mut reached: FxHashSet<String> = FxHashSet::default();
    reached.insert("ground".to_string());

    loop {
        let mut changed = false;
        for edge in position.active_edges() {
            let a = reached.contains(edge.a.as_str());
            let b = reached.contains(edge.b.as_str());
            if a && !b {
                changed |= reached.insert(edge.b.as_str().to_string());
            } else if b && !a {
                changed |= reached.insert(edge.a.as_str().to_string());
            }
        }
        if !changed {
            return reached;
        }
    }
}

/// Pick a legal move for `player` by index, wrapping around.
pub fn pick(position: &Position, player: Player, choice: usize) -> Option<hackenbush::core::EdgeId> {
    let legal: Vec<_> = position.legal_moves(player).map(|e| e.id.clone()).collect();
    if legal.is_empty() {
        None
    } else {
        Some(legal[choice % legal.len()].clone())
    }
}
