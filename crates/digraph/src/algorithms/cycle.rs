use std::{hash::Hash, slice::Iter};

use log::trace;
use rustc_hash::FxHashSet;

use crate::{Graph, GraphResult};

pub trait CycleDetection: Graph {
    /// Returns whether a cycle is reachable from `starting_node`.
    ///
    /// Nodes that are not reachable from `starting_node` are never inspected.
    fn has_cycle(&self, starting_node: &Self::Node) -> GraphResult<bool, Self::Node>;

    /// Returns whether the graph contains a cycle anywhere.
    fn has_any_cycle(&self) -> GraphResult<bool, Self::Node>;
}

impl<G> CycleDetection for G
where
    G: Graph,
{
    fn has_cycle(&self, starting_node: &G::Node) -> GraphResult<bool, G::Node> {
        let mut cycle_search = CycleSearch::new();

        cycle_search.explore(self, starting_node)
    }

    fn has_any_cycle(&self) -> GraphResult<bool, G::Node> {
        let mut cycle_search = CycleSearch::new();

        for node in self.nodes() {
            if cycle_search.done.contains(node) {
                continue;
            }
            if cycle_search.explore(self, node)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Bookkeeping for a depth-first cycle search.
///
/// `in_progress` holds exactly the nodes on the current path, `done` the
/// nodes whose reachable subgraph is known to be cycle free.
struct CycleSearch<'a, N> {
    in_progress: FxHashSet<&'a N>,
    done: FxHashSet<&'a N>,
}

impl<'a, N> CycleSearch<'a, N>
where
    N: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self {
            in_progress: FxHashSet::default(),
            done: FxHashSet::default(),
        }
    }

    fn explore<G>(&mut self, g: &'a G, root: &'a N) -> GraphResult<bool, N>
    where
        G: Graph<Node = N>,
    {
        let mut stack: Vec<(&'a N, Iter<'a, N>)> =
            vec![(root, g.get_neighbors(root)?.iter())];
        self.in_progress.insert(root);

        loop {
            let Some((node, neighbors)) = stack.last_mut() else {
                return Ok(false);
            };
            let node: &'a N = *node;
            let next = neighbors.next();

            match next {
                Some(next) if self.in_progress.contains(next) => {
                    trace!("back edge found at depth {}", stack.len());
                    return Ok(true);
                }
                Some(next) if self.done.contains(next) => {}
                Some(next) => {
                    let next_neighbors = g.get_neighbors(next)?.iter();
                    self.in_progress.insert(next);
                    stack.push((next, next_neighbors));
                }
                None => {
                    self.in_progress.remove(node);
                    self.done.insert(node);
                    stack.pop();
                }
            }
        }
    }
}
