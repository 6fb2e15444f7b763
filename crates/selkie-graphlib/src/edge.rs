//! Edge value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::node::{GraphNode, Label};

/// An immutable edge between two nodes, with an optional non-negative weight.
///
/// Equality and hashing cover the endpoints and the directedness flag only;
/// for an undirected edge the endpoints compare as an unordered pair. The
/// weight never participates in equality, so two edges between the same
/// endpoints are the same edge even when their weights differ.
#[derive(Debug, Clone)]
pub struct GraphEdge<L: Label> {
    node1: GraphNode<L>,
    node2: GraphNode<L>,
    directed: bool,
    weight: Option<f64>,
}

impl<L: Label> GraphEdge<L> {
    pub fn new(node1: GraphNode<L>, node2: GraphNode<L>, directed: bool) -> Self {
        Self {
            node1,
            node2,
            directed,
            weight: None,
        }
    }

    pub fn new_weighted(
        node1: GraphNode<L>,
        node2: GraphNode<L>,
        directed: bool,
        weight: f64,
    ) -> Self {
        Self {
            node1,
            node2,
            directed,
            weight: Some(weight),
        }
    }

    pub fn node1(&self) -> &GraphNode<L> {
        &self.node1
    }

    pub fn node2(&self) -> &GraphNode<L> {
        &self.node2
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }
}

impl<L: Label> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        if self.directed {
            self.node1 == other.node1 && self.node2 == other.node2
        } else {
            (self.node1 == other.node1 && self.node2 == other.node2)
                || (self.node1 == other.node2 && self.node2 == other.node1)
        }
    }
}

impl<L: Label> Eq for GraphEdge<L> {}

impl<L: Label> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            // Undirected endpoints are an unordered pair; combine their hashes
            // commutatively so the hash agrees with equality.
            let h1 = node_hash(&self.node1);
            let h2 = node_hash(&self.node2);
            state.write_u64(h1.wrapping_add(h2));
        }
    }
}

fn node_hash<L: Label>(node: &GraphNode<L>) -> u64 {
    let mut hasher = FxHasher::default();
    node.hash(&mut hasher);
    hasher.finish()
}

impl<L: Label> fmt::Display for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.node1, arrow, self.node2)?;
        if let Some(w) = self.weight {
            write!(f, " [{w}]")?;
        }
        Ok(())
    }
}
