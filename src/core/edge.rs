//! Vertex and edge identification.
//!
//! Vertices are opaque string identifiers implied by edge endpoints. The
//! vertex named `ground` is structural: it is the reachability root and is
//! always reachable from itself.
//!
//! ## Usage
//!
//! ```
//! use hackenbush::core::{Color, Edge, VertexId};
//!
//! let edge = Edge::new("e1", "ground", "a", Color::Blue);
//!
//! assert!(edge.active);
//! assert_eq!(edge.other_end(&VertexId::ground()), Some(&VertexId::new("a")));
//! ```

use serde::{Deserialize, Serialize};

use super::player::Color;

/// Name of the root vertex.
pub const GROUND: &str = "ground";

/// Opaque vertex identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Create a vertex ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `ground` vertex.
    #[must_use]
    pub fn ground() -> Self {
        Self(GROUND.to_string())
    }

    /// Check if this is the `ground` vertex.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.0 == GROUND
    }

    /// Get the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque edge identifier, unique within a position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Create an edge ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An undirected edge of the game graph.
///
/// `active` is maintained by the engine: it starts `true` and only ever
/// flips to `false` through move application.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: VertexId,
    pub b: VertexId,
    pub color: Color,
    pub active: bool,
}

impl Edge {
    /// Create an active edge between `a` and `b`.
    #[must_use]
    pub fn new(
        id: impl Into<EdgeId>,
        a: impl Into<VertexId>,
        b: impl Into<VertexId>,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            color,
            active: true,
        }
    }

    /// The endpoint opposite `vertex`, or `None` if the edge doesn't touch it.
    ///
    /// For a self-loop this returns the loop's own vertex.
    #[must_use]
    pub fn other_end(&self, vertex: &VertexId) -> Option<&VertexId> {
        if &self.a == vertex {
            Some(&self.b)
        } else if &self.b == vertex {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Check if this edge is a loop (both endpoints equal).
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} {}-{})", self.id, self.color, self.a, self.b)
    }
}
