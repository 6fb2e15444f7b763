use std::collections::{HashMap, HashSet, VecDeque};

use selkie::graphlib::{self, AdjacencyMatrixGraph, Graph, GraphEdge, GraphNode};
use selkie::{Error, minimum_spanning_forest};

fn build_graph(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> selkie::Result<AdjacencyMatrixGraph<&'static str>> {
    let mut g = AdjacencyMatrixGraph::new();
    for &label in nodes {
        g.add_node_by_label(label)?;
    }
    for &(a, b, w) in edges {
        g.add_weighted_edge_by_labels(&a, &b, w)?;
    }
    Ok(g)
}

fn total_weight(edges: &selkie::EdgeSet<&'static str>) -> f64 {
    edges.iter().map(|e| e.weight().unwrap()).sum()
}

fn contains_edge(edges: &selkie::EdgeSet<&'static str>, a: &'static str, b: &'static str) -> bool {
    edges.contains(&GraphEdge::new(GraphNode::new(a), GraphNode::new(b), false))
}

/// Whether `chosen` connects every node in `nodes` into one component.
fn spans(nodes: &[&'static str], chosen: &[(&'static str, &'static str, f64)]) -> bool {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for &(a, b, _) in chosen {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    seen.insert(nodes[0]);
    queue.push_back(nodes[0]);
    while let Some(v) = queue.pop_front() {
        for &w in adjacency.get(v).into_iter().flatten() {
            if seen.insert(w) {
                queue.push_back(w);
            }
        }
    }
    seen.len() == nodes.len()
}

#[test]
fn four_node_scenario_picks_the_cheap_chain() {
    let g = build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "D", 3.0),
            ("A", "D", 10.0),
            ("A", "C", 4.0),
        ],
    )
    .unwrap();

    let mst = minimum_spanning_forest(&g).unwrap();
    assert_eq!(mst.len(), 3);
    assert!(contains_edge(&mst, "A", "B"));
    assert!(contains_edge(&mst, "B", "C"));
    assert!(contains_edge(&mst, "C", "D"));
    assert_eq!(total_weight(&mst), 6.0);
}

#[test]
fn connected_graph_yields_exactly_n_minus_one_edges() {
    let g = build_graph(
        &["a", "b", "c", "d", "e", "f"],
        &[
            ("a", "b", 4.0),
            ("a", "c", 4.0),
            ("b", "c", 2.0),
            ("c", "d", 3.0),
            ("c", "e", 2.0),
            ("c", "f", 4.0),
            ("d", "f", 3.0),
            ("e", "f", 3.0),
        ],
    )
    .unwrap();

    let mst = minimum_spanning_forest(&g).unwrap();
    assert_eq!(mst.len(), 5);
}

#[test]
fn disconnected_graph_yields_a_spanning_forest() {
    let g = build_graph(
        &["a", "b", "c", "x", "y"],
        &[
            ("a", "b", 1.0),
            ("b", "c", 5.0),
            ("a", "c", 2.0),
            ("x", "y", 4.0),
        ],
    )
    .unwrap();

    let forest = minimum_spanning_forest(&g).unwrap();
    // Five nodes in two components: 5 - 2 = 3 edges.
    assert_eq!(forest.len(), 3);
    assert!(contains_edge(&forest, "a", "b"));
    assert!(contains_edge(&forest, "a", "c"));
    assert!(!contains_edge(&forest, "b", "c"));
    assert!(contains_edge(&forest, "x", "y"));
    assert_eq!(total_weight(&forest), 7.0);
}

#[test]
fn trivial_graphs_yield_empty_forests() {
    let empty = build_graph(&[], &[]).unwrap();
    assert!(minimum_spanning_forest(&empty).unwrap().is_empty());

    let lonely = build_graph(&["only"], &[]).unwrap();
    assert!(minimum_spanning_forest(&lonely).unwrap().is_empty());
}

#[test]
fn equal_weights_still_produce_a_valid_spanning_tree() {
    let nodes = ["a", "b", "c", "d"];
    let edges = [
        ("a", "b", 1.0),
        ("b", "c", 1.0),
        ("c", "d", 1.0),
        ("d", "a", 1.0),
    ];
    let g = build_graph(&nodes, &edges).unwrap();

    let mst = minimum_spanning_forest(&g).unwrap();
    assert_eq!(mst.len(), 3);
    assert_eq!(total_weight(&mst), 3.0);

    let chosen: Vec<(&str, &str, f64)> = edges
        .iter()
        .copied()
        .filter(|&(a, b, _)| contains_edge(&mst, a, b))
        .collect();
    assert!(spans(&nodes, &chosen));
}

#[test]
fn result_weight_is_minimal_by_exhaustive_enumeration() {
    let nodes = ["a", "b", "c", "d", "e"];
    let edges = [
        ("a", "b", 2.0),
        ("a", "c", 3.0),
        ("b", "c", 1.0),
        ("b", "d", 4.0),
        ("c", "d", 5.0),
        ("c", "e", 6.0),
        ("d", "e", 7.0),
        ("a", "e", 8.0),
    ];
    let g = build_graph(&nodes, &edges).unwrap();
    let mst = minimum_spanning_forest(&g).unwrap();
    assert_eq!(mst.len(), nodes.len() - 1);

    // Try every edge subset of spanning-tree size and keep the cheapest one
    // that actually spans; the computed forest must match its weight.
    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != nodes.len() - 1 {
            continue;
        }
        let chosen: Vec<(&str, &str, f64)> = edges
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, e)| e)
            .collect();
        if spans(&nodes, &chosen) {
            let weight: f64 = chosen.iter().map(|&(_, _, w)| w).sum();
            best = best.min(weight);
        }
    }

    assert_eq!(total_weight(&mst), best);
}

#[test]
fn unweighted_edges_are_rejected() {
    let mut g = build_graph(&["a", "b"], &[]).unwrap();
    g.add_edge_by_labels(&"a", &"b").unwrap();
    assert!(matches!(
        minimum_spanning_forest(&g),
        Err(Error::MissingWeight { .. })
    ));
}

#[test]
fn negative_weights_are_rejected() {
    let mut g = build_graph(&["a", "b"], &[]).unwrap();
    // The weighted-add boundary refuses negative weights, so smuggle the edge
    // in as a prebuilt value; validation must still catch it.
    g.add_edge(GraphEdge::new_weighted(
        GraphNode::new("a"),
        GraphNode::new("b"),
        false,
        -2.0,
    ))
    .unwrap();
    assert!(matches!(
        minimum_spanning_forest(&g),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn directed_graphs_are_rejected() {
    struct DirectedStub;

    impl Graph<&'static str> for DirectedStub {
        fn is_directed(&self) -> bool {
            true
        }
        fn node_count(&self) -> usize {
            0
        }
        fn edge_count(&self) -> usize {
            0
        }
        fn clear(&mut self) {}
        fn add_node(&mut self, _node: GraphNode<&'static str>) -> graphlib::Result<()> {
            Ok(())
        }
        fn remove_node(&mut self, _node: &GraphNode<&'static str>) -> graphlib::Result<()> {
            Ok(())
        }
        fn node(&self, _node: &GraphNode<&'static str>) -> Option<&GraphNode<&'static str>> {
            None
        }
        fn nodes(&self) -> Vec<&GraphNode<&'static str>> {
            Vec::new()
        }
        fn add_edge(&mut self, _edge: GraphEdge<&'static str>) -> graphlib::Result<bool> {
            Ok(false)
        }
        fn remove_edge(&mut self, _edge: &GraphEdge<&'static str>) -> graphlib::Result<()> {
            Ok(())
        }
        fn edge_between(
            &self,
            _node1: &GraphNode<&'static str>,
            _node2: &GraphNode<&'static str>,
        ) -> graphlib::Result<Option<&GraphEdge<&'static str>>> {
            Ok(None)
        }
        fn edges(&self) -> Vec<&GraphEdge<&'static str>> {
            Vec::new()
        }
        fn adjacent_nodes_of(
            &self,
            _node: &GraphNode<&'static str>,
        ) -> graphlib::Result<Vec<&GraphNode<&'static str>>> {
            Ok(Vec::new())
        }
        fn edges_of(
            &self,
            _node: &GraphNode<&'static str>,
        ) -> graphlib::Result<Vec<&GraphEdge<&'static str>>> {
            Ok(Vec::new())
        }
    }

    assert!(matches!(
        minimum_spanning_forest(&DirectedStub),
        Err(Error::DirectedGraph)
    ));
}

#[test]
fn accepted_edges_carry_their_original_weights() {
    let g = build_graph(&["a", "b", "c"], &[("a", "b", 1.5), ("b", "c", 2.5)]).unwrap();
    let mst = minimum_spanning_forest(&g).unwrap();

    let mut weights: Vec<f64> = mst.iter().map(|e| e.weight().unwrap()).collect();
    weights.sort_by(f64::total_cmp);
    assert_eq!(weights, vec![1.5, 2.5]);
}
