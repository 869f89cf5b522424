use log::trace;
use rustc_hash::FxHashSet;

use crate::{Graph, GraphResult};

pub trait Dfs: Graph {
    /// Returns every node reachable from `starting_node` in depth-first
    /// pre-order.
    ///
    /// Neighbors are entered in adjacency-list order. The result is the same
    /// as the recursive formulation, but the call stack does not grow with
    /// the depth of the graph.
    fn dfs(&self, starting_node: &Self::Node) -> GraphResult<Vec<Self::Node>, Self::Node>;
}

impl<G> Dfs for G
where
    G: Graph,
{
    fn dfs(&self, starting_node: &G::Node) -> GraphResult<Vec<G::Node>, G::Node> {
        let mut visited = FxHashSet::from_iter([starting_node]);
        let mut order = vec![starting_node.clone()];
        let mut stack = vec![self.get_neighbors(starting_node)?.iter()];

        loop {
            let Some(neighbors) = stack.last_mut() else {
                break;
            };

            match neighbors.next() {
                Some(next) => {
                    if visited.insert(next) {
                        order.push(next.clone());
                        stack.push(self.get_neighbors(next)?.iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        trace!("dfs reached {} nodes", order.len());

        Ok(order)
    }
}
