//! Minimum spanning forests via Kruskal's greedy edge selection.

use rustc_hash::FxBuildHasher;
use selkie_graphlib::{Graph, GraphEdge, GraphNode, Label};
use tracing::debug;

use crate::disjoint_sets::DisjointSetForest;
use crate::error::{Error, Result};

/// Edge set returned by [`minimum_spanning_forest`].
pub type EdgeSet<L> = hashbrown::HashSet<GraphEdge<L>, FxBuildHasher>;

/// Computes a minimum spanning forest of an undirected, non-negatively
/// weighted graph.
///
/// The result holds exactly `n − c` edges for a graph with `n` nodes and `c`
/// connected components: a minimum spanning tree per component, a single
/// spanning tree when the graph is connected. When several edges share a
/// weight the returned forest is one of the possibly many minimum-weight
/// forests; no particular tie order is promised.
///
/// The whole graph is validated before any forest state exists, so a failed
/// call leaves nothing behind:
///
/// - [`Error::DirectedGraph`] if the graph reports itself directed;
/// - [`Error::MissingWeight`] if any edge has no weight;
/// - [`Error::NegativeWeight`] if any edge weight is negative (NaN weights
///   fail the same check).
pub fn minimum_spanning_forest<L, G>(graph: &G) -> Result<EdgeSet<L>>
where
    L: Label,
    G: Graph<L>,
{
    if graph.is_directed() {
        return Err(Error::DirectedGraph);
    }

    let mut edges: Vec<(GraphEdge<L>, f64)> = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        match edge.weight() {
            None => {
                return Err(Error::MissingWeight {
                    edge: edge.to_string(),
                });
            }
            Some(weight) if !(weight >= 0.0) => {
                return Err(Error::NegativeWeight {
                    edge: edge.to_string(),
                    weight,
                });
            }
            Some(weight) => edges.push((edge.clone(), weight)),
        }
    }

    let mut forest: DisjointSetForest<GraphNode<L>> = DisjointSetForest::new();
    for node in graph.nodes() {
        forest.make_set(node.clone())?;
    }

    sort_by_weight(&mut edges);

    let mut accepted = EdgeSet::default();
    for (edge, _) in edges {
        // Endpoints in different trees: the edge joins two components and is
        // kept. Same tree: it would close a cycle and is discarded.
        if forest.union(edge.node1(), edge.node2())? {
            accepted.insert(edge);
        }
    }

    debug!(
        nodes = graph.node_count(),
        accepted = accepted.len(),
        "minimum spanning forest computed"
    );
    Ok(accepted)
}

/// In-place partition-exchange sort by ascending weight.
///
/// Last-element pivot, no randomization: average O(m log m), quadratic on
/// already-sorted or reverse-sorted weight sequences. The partition
/// comparison is non-strict, so equal weights keep no particular relative
/// order. Recursion is replaced by an explicit segment stack.
fn sort_by_weight<L: Label>(edges: &mut [(GraphEdge<L>, f64)]) {
    if edges.len() < 2 {
        return;
    }
    let mut segments = vec![(0usize, edges.len() - 1)];
    while let Some((lo, hi)) = segments.pop() {
        if lo >= hi {
            continue;
        }
        let p = partition(edges, lo, hi);
        if p > lo {
            segments.push((lo, p - 1));
        }
        if p < hi {
            segments.push((p + 1, hi));
        }
    }
}

fn partition<L: Label>(edges: &mut [(GraphEdge<L>, f64)], lo: usize, hi: usize) -> usize {
    let pivot = edges[hi].1;
    let mut i = lo;
    for j in lo..hi {
        if pivot >= edges[j].1 {
            edges.swap(i, j);
            i += 1;
        }
    }
    edges.swap(i, hi);
    i
}
