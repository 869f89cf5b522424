use std::hash::Hash;

use thiserror::Error;

pub mod algorithms;
pub mod builder;
pub mod generate;
pub mod graph;
pub mod input;

pub use algorithms::{bfs::Bfs, cycle::CycleDetection, dfs::Dfs};
pub use graph::adjacency::DirectedGraph;

pub type GraphResult<T, N> = Result<T, GraphError<N>>;

#[derive(Debug, Error)]
pub enum GraphError<N> {
    /// A node was used as a lookup key but has no entry in the adjacency list.
    #[error("node {0:?} not found in graph")]
    KeyNotFound(N),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("invalid adjacency json: {0}")]
    Json(#[from] serde_json::Error),
}

impl<N> GraphError<N> {
    /// Returns the missing node if this is a [`GraphError::KeyNotFound`].
    pub fn missing_node(&self) -> Option<&N> {
        match self {
            Self::KeyNotFound(node) => Some(node),
            _ => None,
        }
    }
}

/// Read access to a directed graph stored as an adjacency list.
///
/// Every algorithm in [`algorithms`] is written against this trait and only
/// ever asks for neighbor lists through [`Graph::get_neighbors`].
pub trait Graph {
    type Node: Eq + Hash + Clone;

    /// Returns the ordered neighbor list of `node`.
    ///
    /// Fails with [`GraphError::KeyNotFound`] if `node` has no entry.
    fn get_neighbors(&self, node: &Self::Node) -> GraphResult<&[Self::Node], Self::Node>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Iterates over every node that has an entry in the adjacency list.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a;

    fn contains_node(&self, node: &Self::Node) -> bool {
        self.get_neighbors(node).is_ok()
    }
}
