//! Position graph and connectivity.
//!
//! A position is an immutable snapshot of every edge and whether it is still
//! standing. Reachability from `ground` is recomputed by BFS on every move,
//! and edges that lose their path to `ground` fall immediately, never lazily.

pub mod graph;

pub use graph::Position;
