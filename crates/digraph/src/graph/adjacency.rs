use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    Graph, GraphError, GraphResult,
    algorithms::{bfs::Bfs, cycle::CycleDetection, dfs::Dfs},
};

/// Directed graph backed by a map from node to its ordered neighbor list.
///
/// Duplicate edges and self-loops are allowed. A neighbor does not need an
/// entry of its own; such a dangling node only fails once an algorithm asks
/// for its neighbor list. The graph cannot be changed after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "N: Deserialize<'de> + Eq + Hash"))]
pub struct DirectedGraph<N> {
    adjacency_list: FxHashMap<N, Vec<N>>,
}

impl<N: Eq + Hash> DirectedGraph<N> {
    /// Create a graph from `(node, neighbors)` pairs.
    ///
    /// If a node occurs more than once, its last neighbor list wins.
    pub fn new<I>(adjacency_list: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<N>)>,
    {
        let g = Self {
            adjacency_list: adjacency_list.into_iter().collect(),
        };

        debug!(
            "Created directed graph (node_count: {}, edge_count: {})",
            g.adjacency_list.len(),
            g.adjacency_list.values().map(Vec::len).sum::<usize>()
        );

        g
    }

    pub fn adjacency(&self) -> &FxHashMap<N, Vec<N>> {
        &self.adjacency_list
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency_list.is_empty()
    }
}

impl<N: Eq + Hash + Clone> DirectedGraph<N> {
    pub fn get_neighbors(&self, node: &N) -> GraphResult<&[N], N> {
        Graph::get_neighbors(self, node)
    }

    /// Returns whether a cycle is reachable from `starting_node`.
    pub fn has_cycle(&self, starting_node: &N) -> GraphResult<bool, N> {
        CycleDetection::has_cycle(self, starting_node)
    }

    /// Returns whether any node of the graph lies on a cycle.
    pub fn has_any_cycle(&self) -> GraphResult<bool, N> {
        CycleDetection::has_any_cycle(self)
    }

    /// Returns all nodes reachable from `starting_node` in breadth-first order.
    pub fn bfs(&self, starting_node: &N) -> GraphResult<Vec<N>, N> {
        Bfs::bfs(self, starting_node)
    }

    /// Returns all nodes reachable from `starting_node` in depth-first pre-order.
    pub fn dfs(&self, starting_node: &N) -> GraphResult<Vec<N>, N> {
        Dfs::dfs(self, starting_node)
    }
}

impl<N: Ord + Debug> DirectedGraph<N> {
    /// Prints the adjacency list to stdout, keys sorted.
    pub fn print_graph(&self) {
        println!("{self}");
    }
}

impl<N: Eq + Hash + Clone> Graph for DirectedGraph<N> {
    type Node = N;

    fn get_neighbors(&self, node: &N) -> GraphResult<&[N], N> {
        self.adjacency_list
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::KeyNotFound(node.clone()))
    }

    fn node_count(&self) -> usize {
        self.adjacency_list.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency_list.values().map(Vec::len).sum()
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a N>
    where
        N: 'a,
    {
        self.adjacency_list.keys()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency_list.contains_key(node)
    }
}

impl<N> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self {
            adjacency_list: FxHashMap::default(),
        }
    }
}

impl<N: Eq + Hash> PartialEq for DirectedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency_list.eq(&other.adjacency_list)
    }
}

impl<N: Eq + Hash> Eq for DirectedGraph<N> {}

impl<N: Eq + Hash> From<FxHashMap<N, Vec<N>>> for DirectedGraph<N> {
    fn from(adjacency_list: FxHashMap<N, Vec<N>>) -> Self {
        Self::new(adjacency_list)
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for DirectedGraph<N> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<N: Ord + Debug> Display for DirectedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.adjacency_list.iter().collect();
        entries.sort_by(|lhs, rhs| lhs.0.cmp(rhs.0));

        write!(f, "{{")?;
        for (i, (node, neighbors)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{node:?}: {neighbors:?}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{Token, assert_tokens};

    use super::*;

    fn setup() -> DirectedGraph<&'static str> {
        DirectedGraph::new([
            ("A", vec!["B", "C"]),
            ("B", vec!["C"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ])
    }

    #[test]
    fn get_neighbors_in_adjacency_order() {
        let graph = setup();

        assert_eq!(graph.get_neighbors(&"A").unwrap(), &["B", "C"]);
        assert!(graph.get_neighbors(&"D").unwrap().is_empty());
    }

    #[test]
    fn get_neighbors_missing_node() {
        let graph = setup();

        let err = graph.get_neighbors(&"X").unwrap_err();
        assert_eq!(err.missing_node(), Some(&"X"));
        assert_eq!(err.to_string(), "node \"X\" not found in graph");
    }

    #[test]
    fn dangling_neighbor_is_accepted_at_construction() {
        let graph = DirectedGraph::new([("A", vec!["Z"])]);

        assert_eq!(graph.node_count(), 1);
        assert!(!graph.contains_node(&"Z"));
        assert!(matches!(
            graph.get_neighbors(&"Z"),
            Err(GraphError::KeyNotFound("Z"))
        ));
    }

    #[test]
    fn counts() {
        let graph = DirectedGraph::new([("A", vec!["A", "B", "B"]), ("B", vec![])]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3, "duplicate edges and self-loops count");
        assert!(!graph.is_empty());
        assert!(DirectedGraph::<u32>::default().is_empty());
    }

    #[test]
    fn last_entry_wins() {
        let graph = DirectedGraph::new([("A", vec!["B"]), ("A", vec![])]);

        assert!(graph.get_neighbors(&"A").unwrap().is_empty());
    }

    #[test]
    fn display_sorts_keys() {
        let graph = DirectedGraph::new([("B", vec!["A"]), ("A", vec!["B", "C"])]);

        assert_eq!(
            graph.to_string(),
            "{\"A\": [\"B\", \"C\"],\n \"B\": [\"A\"]}"
        );
        assert_eq!(DirectedGraph::<u8>::default().to_string(), "{}");
    }

    #[test]
    fn serde_as_map() {
        let graph = DirectedGraph::new([("A".to_string(), vec!["B".to_string()])]);

        assert_tokens(
            &graph,
            &[
                Token::Map { len: Some(1) },
                Token::Str("A"),
                Token::Seq { len: Some(1) },
                Token::Str("B"),
                Token::SeqEnd,
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn from_json() {
        let graph: DirectedGraph<String> =
            serde_json::from_str(r#"{"A": ["B", "C"], "B": [], "C": ["A"]}"#).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.get_neighbors(&"C".to_string()).unwrap(), &["A"]);
    }
}
