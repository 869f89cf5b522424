use rustc_hash::FxHashMap;

use crate::{DirectedGraph, GraphError, input::edgelist::EdgeList};

pub struct Uninitialized {}

pub struct FromEdgeList {
    edges: EdgeList,
}

pub struct FromAdjacency {
    adjacency_list: FxHashMap<String, Vec<String>>,
}

/// Builds a [`DirectedGraph`] with `String` nodes from one of the supported
/// input formats.
///
/// ```
/// use digraph::{Graph, builder::GraphBuilder};
///
/// let graph = GraphBuilder::new()
///     .json(r#"{"A": ["B"], "B": []}"#)
///     .unwrap()
///     .build();
///
/// assert_eq!(graph.node_count(), 2);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    /// Parse a whitespace separated edge list, see [`EdgeList`].
    pub fn edge_list(self, s: &str) -> Result<GraphBuilder<FromEdgeList>, GraphError<String>> {
        Ok(GraphBuilder {
            state: FromEdgeList {
                edges: EdgeList::try_from(s)?,
            },
        })
    }

    /// Parse a JSON object mapping every node to its list of neighbors.
    pub fn json(self, s: &str) -> Result<GraphBuilder<FromAdjacency>, GraphError<String>> {
        Ok(GraphBuilder {
            state: FromAdjacency {
                adjacency_list: serde_json::from_str(s)?,
            },
        })
    }

    pub fn adjacency<I>(self, adjacency_list: I) -> GraphBuilder<FromAdjacency>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        GraphBuilder {
            state: FromAdjacency {
                adjacency_list: adjacency_list.into_iter().collect(),
            },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<FromEdgeList> {
    pub fn build(self) -> DirectedGraph<String> {
        DirectedGraph::from(self.state.edges)
    }
}

impl GraphBuilder<FromAdjacency> {
    pub fn build(self) -> DirectedGraph<String> {
        DirectedGraph::from(self.state.adjacency_list)
    }
}
