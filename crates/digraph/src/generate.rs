use std::hash::Hash;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index::sample};

use crate::DirectedGraph;

/// Generate a reproducible random graph over `nodes`.
///
/// Every node gets an entry whose neighbors are `0..=max_degree` distinct
/// nodes sampled from `nodes`, so no neighbor is ever dangling. The same
/// `seed` always yields the same graph.
pub fn random_graph<N>(nodes: &[N], max_degree: usize, seed: u64) -> DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    debug!(
        "Generating random graph (node_count: {}, max_degree: {max_degree}, seed: {seed})",
        nodes.len()
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let max_degree = max_degree.min(nodes.len());

    nodes
        .iter()
        .map(|node| {
            let degree = rng.random_range(0..=max_degree);
            let neighbors = sample(&mut rng, nodes.len(), degree)
                .into_iter()
                .map(|i| nodes[i].clone())
                .collect();
            (node.clone(), neighbors)
        })
        .collect()
}

/// Labels `A`, `B`, ... `Z`, then `A1`, `B1`, ... for larger graphs.
pub fn node_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let letter = char::from(b'A' + (i % 26) as u8);
            match i / 26 {
                0 => letter.to_string(),
                round => format!("{letter}{round}"),
            }
        })
        .collect()
}
