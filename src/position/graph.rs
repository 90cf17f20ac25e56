//! Immutable game position and move application.

use std::collections::VecDeque;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Edge, EdgeId, Player, VertexId};
use crate::error::{HackenbushError, IllegalMoveReason, Result};

/// A Hackenbush position: the full edge list with activity flags.
///
/// Backed by `im::Vector`, so cloning is O(1) and a position can be used as a
/// branch point inside recursive search without copying. Positions are never
/// mutated after construction; `apply_move` returns a new one.
///
/// ## Invariant
///
/// An edge is active only if both endpoints are reachable from `ground`
/// through active edges. `new` checks it and `apply_move` restores it before
/// returning.
///
/// ```
/// use hackenbush::core::{Color, Edge, EdgeId, Player};
/// use hackenbush::position::Position;
///
/// let position = Position::new(vec![
///     Edge::new("e1", "ground", "a", Color::Blue),
///     Edge::new("e2", "a", "b", Color::Red),
/// ])
/// .unwrap();
///
/// // Cutting the trunk drops everything above it.
/// let next = position.apply_move(&EdgeId::new("e1"), Player::Blue).unwrap();
/// assert_eq!(next.total_active(), 0);
/// assert_eq!(position.total_active(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    edges: Vector<Edge>,
}

/// Wire form of a `Position`, validated before it becomes one.
#[derive(Deserialize)]
struct RawPosition {
    edges: Vec<Edge>,
}

impl TryFrom<RawPosition> for Position {
    type Error = HackenbushError;

    /// Keeps each edge's `active` flag, then re-applies the cascade so a
    /// stored edge hanging from a cut one comes back inactive.
    fn try_from(raw: RawPosition) -> Result<Self> {
        Self::from_edges(raw.edges.into_iter().collect())
    }
}

impl Position {
    /// Build a position from input edges.
    ///
    /// Every edge starts active. Fails with `InvalidPosition` if the list is
    /// empty, no edge touches `ground`, an id repeats, or some edge has no
    /// path to `ground`.
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let edges = edges
            .into_iter()
            .map(|mut edge| {
                edge.active = true;
                edge
            })
            .collect();
        Self::from_edges(edges)
    }

    /// Validate the graph shape, then restore the at-rest invariant for the
    /// given activity flags.
    fn from_edges(edges: Vector<Edge>) -> Result<Self> {
        if edges.is_empty() {
            return Err(HackenbushError::InvalidPosition(
                "position has no edges".to_string(),
            ));
        }

        let mut seen = FxHashSet::default();
        for edge in edges.iter() {
            if !seen.insert(&edge.id) {
                return Err(HackenbushError::InvalidPosition(format!(
                    "duplicate edge id '{}'",
                    edge.id
                )));
            }
        }

        if !edges.iter().any(|e| e.a.is_ground() || e.b.is_ground()) {
            return Err(HackenbushError::InvalidPosition(
                "no edge touches the ground vertex".to_string(),
            ));
        }

        // Every edge must have had a path to ground when all were standing.
        let standing = Self {
            edges: edges
                .iter()
                .cloned()
                .map(|mut edge| {
                    edge.active = true;
                    edge
                })
                .collect(),
        };
        let connected = standing.connected_vertices();
        if let Some(edge) = edges
            .iter()
            .find(|e| !(connected.contains(&e.a) && connected.contains(&e.b)))
        {
            return Err(HackenbushError::InvalidPosition(format!(
                "edge '{}' has no path to ground",
                edge.id
            )));
        }

        let mut position = Self { edges };
        let fallen = position.drop_disconnected();
        if fallen > 0 {
            log::debug!("{} floating edge(s) deactivated on load", fallen);
        }

        Ok(position)
    }

    // === Queries ===

    /// All edges, active or not, in input order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Active edges in input order.
    pub fn active_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| e.active)
    }

    /// Look up an edge by id.
    #[must_use]
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    /// Number of edges, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Active edges `player` may cut (own color or green), in input order.
    pub fn legal_moves(&self, player: Player) -> impl Iterator<Item = &Edge> + '_ {
        self.active_edges().filter(move |e| e.color.playable_by(player))
    }

    /// Check whether `player` has at least one legal move.
    #[must_use]
    pub fn has_moves(&self, player: Player) -> bool {
        self.legal_moves(player).next().is_some()
    }

    /// Number of active edges of exactly `color`.
    #[must_use]
    pub fn active_count(&self, color: Color) -> usize {
        self.active_edges().filter(|e| e.color == color).count()
    }

    /// Number of active edges of any color.
    #[must_use]
    pub fn total_active(&self) -> usize {
        self.active_edges().count()
    }

    /// Check for active green edges.
    #[must_use]
    pub fn has_green(&self) -> bool {
        self.active_count(Color::Green) > 0
    }

    /// Every vertex named by some edge, plus `ground`.
    #[must_use]
    pub fn vertices(&self) -> FxHashSet<VertexId> {
        let mut vertices: FxHashSet<VertexId> = self
            .edges
            .iter()
            .flat_map(|e| [e.a.clone(), e.b.clone()])
            .collect();
        vertices.insert(VertexId::ground());
        vertices
    }

    // === Connectivity ===

    /// Unweighted BFS distance from `ground` to every reachable vertex,
    /// walking active edges in both directions.
    ///
    /// `ground` itself is always present at distance 0.
    #[must_use]
    pub fn ground_distances(&self) -> FxHashMap<VertexId, u32> {
        self.ground_distances_over(|_| true)
    }

    /// Like `ground_distances`, but only walking active edges accepted by
    /// `include`.
    #[must_use]
    pub fn ground_distances_over(&self, include: impl Fn(&Edge) -> bool) -> FxHashMap<VertexId, u32> {
        let mut adjacency: FxHashMap<&VertexId, SmallVec<[&Edge; 4]>> = FxHashMap::default();
        for edge in self.active_edges().filter(|e| include(e)) {
            adjacency.entry(&edge.a).or_default().push(edge);
            if !edge.is_loop() {
                adjacency.entry(&edge.b).or_default().push(edge);
            }
        }

        let ground = VertexId::ground();
        let mut distances = FxHashMap::default();
        distances.insert(ground.clone(), 0u32);
        let mut queue = VecDeque::from([(ground, 0u32)]);

        while let Some((vertex, distance)) = queue.pop_front() {
            let Some(incident) = adjacency.get(&vertex) else {
                continue;
            };
            for neighbor in incident.iter().filter_map(|edge| edge.other_end(&vertex)) {
                if !distances.contains_key(neighbor) {
                    distances.insert(neighbor.clone(), distance + 1);
                    queue.push_back((neighbor.clone(), distance + 1));
                }
            }
        }

        distances
    }

    /// Vertices reachable from `ground` through active edges.
    #[must_use]
    pub fn connected_vertices(&self) -> FxHashSet<VertexId> {
        self.ground_distances().into_keys().collect()
    }

    /// Check whether the active edges contain a cycle.
    ///
    /// Loops and parallel edges count as cycles.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        let mut index: FxHashMap<&VertexId, usize> = FxHashMap::default();
        let mut parent: Vec<usize> = Vec::new();

        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        for edge in self.active_edges() {
            let mut ends = [0usize; 2];
            for (slot, vertex) in ends.iter_mut().zip([&edge.a, &edge.b]) {
                *slot = match index.get(vertex) {
                    Some(&i) => i,
                    None => {
                        let i = parent.len();
                        parent.push(i);
                        index.insert(vertex, i);
                        i
                    }
                };
            }
            let (root_a, root_b) = (find(&mut parent, ends[0]), find(&mut parent, ends[1]));
            if root_a == root_b {
                return true;
            }
            parent[root_a] = root_b;
        }

        false
    }

    // === Moves ===

    /// Cut `edge_id` on behalf of `player`.
    ///
    /// Returns a new position in which the edge is inactive and every edge
    /// that lost its path to `ground` is inactive too. `self` is untouched.
    ///
    /// Fails with `IllegalMove` if the edge doesn't exist, is already
    /// inactive, or has a color `player` may not cut.
    pub fn apply_move(&self, edge_id: &EdgeId, player: Player) -> Result<Self> {
        let index = self
            .edges
            .iter()
            .position(|e| &e.id == edge_id)
            .ok_or_else(|| HackenbushError::illegal(edge_id, IllegalMoveReason::UnknownEdge))?;

        let edge = &self.edges[index];
        if !edge.active {
            return Err(HackenbushError::illegal(edge_id, IllegalMoveReason::InactiveEdge));
        }
        if !edge.color.playable_by(player) {
            return Err(HackenbushError::illegal(
                edge_id,
                IllegalMoveReason::WrongColor {
                    color: edge.color,
                    player,
                },
            ));
        }

        let mut next = self.clone();
        next.edges[index].active = false;
        let fallen = next.drop_disconnected();

        log::trace!(
            "{} cut {}, {} edge(s) fell, {} active",
            player,
            edge_id,
            fallen,
            next.total_active()
        );

        Ok(next)
    }

    /// Deactivate every active edge with an endpoint cut off from `ground`.
    ///
    /// Returns how many edges fell.
    fn drop_disconnected(&mut self) -> usize {
        let connected = self.connected_vertices();
        let fallen: Vec<usize> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active && !(connected.contains(&e.a) && connected.contains(&e.b)))
            .map(|(i, _)| i)
            .collect();

        for &i in &fallen {
            self.edges[i].active = false;
        }

        fallen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Position {
        Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "a", "b", Color::Red),
            Edge::new("e3", "b", "c", Color::Blue),
        ])
        .unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_rejects_empty() {
        let err = Position::new(Vec::new()).unwrap_err();
        assert!(matches!(err, HackenbushError::InvalidPosition(_)));
    }

    #[test]
    fn test_new_rejects_missing_ground() {
        let err = Position::new(vec![Edge::new("e1", "a", "b", Color::Blue)]).unwrap_err();
        assert!(matches!(err, HackenbushError::InvalidPosition(_)));
    }

    #[test]
    fn test_new_rejects_floating_edge() {
        let err = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "x", "y", Color::Red),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            HackenbushError::InvalidPosition("edge 'e2' has no path to ground".to_string())
        );
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e1", "ground", "b", Color::Red),
        ])
        .unwrap_err();
        assert!(matches!(err, HackenbushError::InvalidPosition(_)));
    }

    #[test]
    fn test_new_forces_active() {
        let mut edge = Edge::new("e1", "ground", "a", Color::Blue);
        edge.active = false;
        let position = Position::new(vec![edge]).unwrap();
        assert_eq!(position.total_active(), 1);
    }

    // =========================================================================
    // Connectivity
    // =========================================================================

    #[test]
    fn test_ground_distances() {
        let distances = chain().ground_distances();
        assert_eq!(distances[&VertexId::ground()], 0);
        assert_eq!(distances[&VertexId::new("a")], 1);
        assert_eq!(distances[&VertexId::new("b")], 2);
        assert_eq!(distances[&VertexId::new("c")], 3);
    }

    #[test]
    fn test_distances_take_shortest_path() {
        let position = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "a", "b", Color::Blue),
            Edge::new("e3", "ground", "b", Color::Red),
        ])
        .unwrap();
        assert_eq!(position.ground_distances()[&VertexId::new("b")], 1);
    }

    #[test]
    fn test_vertices_include_fallen_edges() {
        let cut = chain().apply_move(&EdgeId::new("e1"), Player::Blue).unwrap();
        let vertices = cut.vertices();

        assert_eq!(vertices.len(), 4);
        assert!(vertices.contains(&VertexId::new("c")));
        assert!(!cut.connected_vertices().contains(&VertexId::new("c")));
    }

    #[test]
    fn test_connected_vertices_includes_ground() {
        let connected = chain().connected_vertices();
        assert_eq!(connected.len(), 4);
        assert!(connected.contains(&VertexId::ground()));
    }

    #[test]
    fn test_has_cycle() {
        assert!(!chain().has_cycle());

        let triangle = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "a", "b", Color::Red),
            Edge::new("e3", "b", "ground", Color::Blue),
        ])
        .unwrap();
        assert!(triangle.has_cycle());

        let parallel = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "ground", "a", Color::Red),
        ])
        .unwrap();
        assert!(parallel.has_cycle());

        let looped = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "a", "a", Color::Red),
        ])
        .unwrap();
        assert!(looped.has_cycle());
    }

    // =========================================================================
    // Moves
    // =========================================================================

    #[test]
    fn test_apply_move_cascades() {
        let position = chain();
        let next = position.apply_move(&EdgeId::new("e2"), Player::Red).unwrap();

        assert!(next.edge(&EdgeId::new("e1")).unwrap().active);
        assert!(!next.edge(&EdgeId::new("e2")).unwrap().active);
        assert!(!next.edge(&EdgeId::new("e3")).unwrap().active);
        assert_eq!(position.total_active(), 3);
    }

    #[test]
    fn test_apply_move_keeps_alternate_path() {
        let position = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "ground", "a", Color::Red),
            Edge::new("e3", "a", "b", Color::Blue),
        ])
        .unwrap();
        let next = position.apply_move(&EdgeId::new("e1"), Player::Blue).unwrap();
        assert_eq!(next.total_active(), 2);
    }

    #[test]
    fn test_apply_move_green_by_either() {
        let position = Position::new(vec![Edge::new("g", "ground", "a", Color::Green)]).unwrap();
        assert!(position.apply_move(&EdgeId::new("g"), Player::Red).is_ok());
        assert!(position.apply_move(&EdgeId::new("g"), Player::Blue).is_ok());
    }

    #[test]
    fn test_apply_move_errors() {
        let position = chain();

        let unknown = position.apply_move(&EdgeId::new("nope"), Player::Blue).unwrap_err();
        assert!(matches!(
            unknown,
            HackenbushError::IllegalMove { reason: IllegalMoveReason::UnknownEdge, .. }
        ));

        let wrong = position.apply_move(&EdgeId::new("e2"), Player::Blue).unwrap_err();
        assert!(matches!(
            wrong,
            HackenbushError::IllegalMove { reason: IllegalMoveReason::WrongColor { .. }, .. }
        ));

        let next = position.apply_move(&EdgeId::new("e2"), Player::Red).unwrap();
        let stale = next.apply_move(&EdgeId::new("e3"), Player::Blue).unwrap_err();
        assert!(stale.is_stale());
    }

    #[test]
    fn test_legal_moves() {
        let position = Position::new(vec![
            Edge::new("e1", "ground", "a", Color::Blue),
            Edge::new("e2", "ground", "b", Color::Red),
            Edge::new("e3", "ground", "c", Color::Green),
        ])
        .unwrap();

        let blue: Vec<_> = position.legal_moves(Player::Blue).map(|e| e.id.as_str()).collect();
        let red: Vec<_> = position.legal_moves(Player::Red).map(|e| e.id.as_str()).collect();
        assert_eq!(blue, vec!["e1", "e3"]);
        assert_eq!(red, vec!["e2", "e3"]);
        assert!(position.has_green());
    }
}
