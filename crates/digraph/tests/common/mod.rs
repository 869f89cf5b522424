#![allow(dead_code)]

use digraph::DirectedGraph;

/// `A -> B -> C -> D` with the shortcut `A -> C`.
pub fn graph_a() -> DirectedGraph<&'static str> {
    DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["C"]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ])
}

/// Cycle `A -> B -> A`.
pub fn graph_b() -> DirectedGraph<&'static str> {
    DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E", "A"]),
        ("C", vec!["E", "F"]),
        ("D", vec![]),
        ("E", vec![]),
        ("F", vec!["G"]),
        ("G", vec![]),
    ])
}

/// Cycle `A -> C -> G -> A`.
pub fn graph_c() -> DirectedGraph<&'static str> {
    DirectedGraph::new([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E"]),
        ("C", vec!["F", "G"]),
        ("D", vec![]),
        ("E", vec![]),
        ("F", vec![]),
        ("G", vec!["A"]),
    ])
}

/// Build a graph from `(parent, child)` edges, giving every mentioned node
/// an entry.
pub fn from_edges(edges: &[(u32, u32)]) -> DirectedGraph<u32> {
    let mut adjacency: Vec<(u32, Vec<u32>)> = Vec::new();
    for &(parent, child) in edges {
        for node in [parent, child] {
            if !adjacency.iter().any(|(n, _)| *n == node) {
                adjacency.push((node, Vec::new()));
            }
        }
        if let Some((_, children)) = adjacency.iter_mut().find(|(n, _)| *n == parent) {
            children.push(child);
        }
    }

    DirectedGraph::new(adjacency)
}

/// ```text
///      |--->6
/// 1--->2--->5
/// |--->3
/// |--->4
/// ```
pub fn sample_tree() -> DirectedGraph<u32> {
    from_edges(&[(1, 2), (2, 5), (2, 6), (1, 3), (1, 4)])
}

/// 7 points back at the root.
/// ```text
/// |-------------|
/// v    |--->5-->7
/// 1--->2--->6
/// |--->3
/// |--->4
/// ```
pub fn left_cycle() -> DirectedGraph<u32> {
    from_edges(&[(1, 2), (2, 5), (5, 7), (2, 6), (1, 3), (1, 4), (7, 1)])
}

/// 7 and 1 both point at the leaf 3.
/// ```text
/// |--->6
/// 1--->2--->5-->7
/// |--->3<-------|
/// |--->4
/// ```
pub fn almost_cycle_into_leaf() -> DirectedGraph<u32> {
    from_edges(&[(1, 2), (2, 5), (5, 7), (2, 6), (1, 3), (1, 4), (7, 3)])
}

/// 7 and 1 both point at 3, which has the child 8.
/// ```text
/// 1----->2--->5-->7
/// |      |--->6   |
/// |----->3<-------|
/// |--->4  \-->8
/// ```
pub fn almost_cycle_with_child() -> DirectedGraph<u32> {
    from_edges(&[
        (1, 2),
        (2, 5),
        (5, 7),
        (2, 6),
        (1, 3),
        (1, 4),
        (7, 3),
        (3, 8),
    ])
}

/// 3 points back at the root.
/// ```text
/// |>1-->2
/// | |-->3
/// |-----|
/// ```
pub fn right_cycle() -> DirectedGraph<u32> {
    from_edges(&[(1, 2), (1, 3), (3, 1)])
}

/// 2 and 3 both point at 4.
/// ```text
/// 1--->2------>3
///      |-->4<--|
/// ```
pub fn x_shape() -> DirectedGraph<u32> {
    from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4)])
}
