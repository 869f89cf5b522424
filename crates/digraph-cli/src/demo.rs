use std::fmt::Debug;

use digraph::{
    DirectedGraph, GraphResult,
    generate::{node_labels, random_graph},
};
use log::{error, info};

/// Records the outcome of one expected result.
#[derive(Default)]
pub struct Checks {
    passed: usize,
    failed: usize,
}

impl Checks {
    fn expect<T, N>(&mut self, what: &str, actual: GraphResult<T, N>, expected: T)
    where
        T: PartialEq + Debug,
        N: Debug,
    {
        let actual = actual.map_err(|e| e.to_string());
        if actual.as_ref() == Ok(&expected) {
            self.passed += 1;
        } else {
            self.failed += 1;
            error!("{what}: expected {expected:?}, got {actual:?}");
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}

/// Runs the sample graphs through every algorithm and compares the results.
pub fn check_samples() -> Checks {
    let mut checks = Checks::default();

    let graph_a = DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["C"]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ]);

    let graph_b = DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E", "A"]),
        ("C", vec!["E", "F"]),
        ("D", vec![]),
        ("E", vec![]),
        ("F", vec!["G"]),
        ("G", vec![]),
    ]);

    let graph_c = DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E"]),
        ("C", vec!["F", "G"]),
        ("D", vec![]),
        ("E", vec![]),
        ("F", vec![]),
        ("G", vec!["A"]),
    ]);

    checks.expect("graph_a.has_cycle(A)", graph_a.has_cycle(&"A"), false);
    checks.expect("graph_b.has_cycle(A)", graph_b.has_cycle(&"A"), true);
    checks.expect("graph_c.has_cycle(A)", graph_c.has_cycle(&"A"), true);

    checks.expect("graph_a.bfs(A)", graph_a.bfs(&"A"), vec!["A", "B", "C", "D"]);
    checks.expect("graph_a.dfs(A)", graph_a.dfs(&"A"), vec!["A", "B", "C", "D"]);
    checks.expect("graph_a.bfs(D)", graph_a.bfs(&"D"), vec!["D"]);
    checks.expect("graph_a.bfs(B)", graph_a.bfs(&"B"), vec!["B", "C", "D"]);

    checks.expect(
        "graph_b.bfs(A)",
        graph_b.bfs(&"A"),
        vec!["A", "B", "C", "D", "E", "F", "G"],
    );
    checks.expect(
        "graph_b.dfs(A)",
        graph_b.dfs(&"A"),
        vec!["A", "B", "D", "E", "C", "F", "G"],
    );
    checks.expect(
        "graph_b.dfs(B)",
        graph_b.dfs(&"B"),
        vec!["B", "D", "E", "A", "C", "F", "G"],
    );

    info!(
        "Sample checks: {} passed, {} failed",
        checks.passed(),
        checks.failed()
    );

    checks
}

/// Prints a seeded random graph and whether a cycle is reachable from its
/// first node.
pub fn random_demo(node_count: usize, max_degree: usize, seed: u64) -> GraphResult<(), String> {
    let nodes = node_labels(node_count);
    let graph = random_graph(&nodes, max_degree, seed);

    graph.print_graph();

    if let Some(first) = nodes.first() {
        println!("{}", graph.has_cycle(first)?);
    }

    Ok(())
}
