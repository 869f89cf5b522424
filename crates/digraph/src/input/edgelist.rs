use rustc_hash::{FxHashMap, FxHashSet};

use crate::{DirectedGraph, GraphError};

/// Directed edges read from a plain text edge list.
///
/// Every non-empty line is either `source target` (an edge) or a single
/// `node` (a node without outgoing edges). Lines starting with `#` are
/// comments. Targets are not declared implicitly: a sink has to be listed on
/// its own line, otherwise it stays a dangling neighbor.
#[derive(Debug, Default, PartialEq)]
pub struct EdgeList {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl EdgeList {
    pub fn new(nodes: Vec<String>, edges: Vec<(String, String)>) -> Self {
        Self { nodes, edges }
    }

    /// Nodes that have an entry of their own, in order of first appearance.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }
}

impl TryFrom<&str> for EdgeList {
    type Error = GraphError<String>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result = EdgeList::default();
        let mut declared = FxHashSet::default();

        for (i, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let source = match tokens.as_slice() {
                [source] => *source,
                [source, target] => {
                    result
                        .edges
                        .push((source.to_string(), target.to_string()));
                    *source
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: i + 1,
                        reason: format!(
                            "expected `source [target]`, found {} tokens",
                            tokens.len()
                        ),
                    });
                }
            };

            if declared.insert(source) {
                result.nodes.push(source.to_string());
            }
        }

        Ok(result)
    }
}

impl From<EdgeList> for DirectedGraph<String> {
    fn from(value: EdgeList) -> Self {
        let mut adjacency_list: FxHashMap<String, Vec<String>> = value
            .nodes
            .into_iter()
            .map(|node| (node, Vec::new()))
            .collect();

        for (source, target) in value.edges {
            adjacency_list.entry(source).or_default().push(target);
        }

        DirectedGraph::from(adjacency_list)
    }
}
