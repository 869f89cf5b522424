use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use crate::{Graph, GraphResult};

pub trait Bfs: Graph {
    /// Returns every node reachable from `starting_node` in breadth-first order.
    fn bfs(&self, starting_node: &Self::Node) -> GraphResult<Vec<Self::Node>, Self::Node>;
}

impl<G> Bfs for G
where
    G: Graph,
{
    fn bfs(&self, starting_node: &G::Node) -> GraphResult<Vec<G::Node>, G::Node> {
        let mut frontier = VecDeque::from([starting_node]);
        let mut visited = FxHashSet::from_iter([starting_node]);
        let mut order = Vec::new();

        while let Some(node) = frontier.pop_front() {
            order.push(node.clone());

            // Mark on discovery so a node with two parents is queued once.
            for neighbor in self.get_neighbors(node)? {
                if visited.insert(neighbor) {
                    frontier.push_back(neighbor);
                }
            }
        }

        trace!("bfs reached {} nodes", order.len());

        Ok(order)
    }
}
