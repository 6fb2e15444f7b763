//! Graph capability traits.
//!
//! The surface is split by capability rather than collected behind one
//! abstract type: [`Graph`] is the query-and-mutate contract every
//! representation supports, [`IndexedGraph`] adds dense integer addressing,
//! and [`Directed`] holds the queries that only make sense on directed
//! representations. A type implements only the capabilities it actually has,
//! so calling an inapplicable operation is a compile error, not a runtime one.
//!
//! Label-addressed operations are provided methods: they wrap the label into a
//! [`GraphNode`] and delegate to the node-addressed form, so the two modes
//! cannot drift apart.

use crate::edge::GraphEdge;
use crate::error::{Error, Result};
use crate::node::{GraphNode, Label};

/// Query-and-mutate contract over nodes and edges.
pub trait Graph<L: Label> {
    /// Whether this representation stores directed edges.
    fn is_directed(&self) -> bool;

    fn node_count(&self) -> usize;

    /// Number of edges, counting each undirected edge exactly once.
    fn edge_count(&self) -> usize;

    /// Drops every node and edge.
    fn clear(&mut self);

    /// Registers a new node, assigning it the next insertion index.
    ///
    /// Fails with [`Error::DuplicateNode`] if an equal node is already present.
    fn add_node(&mut self, node: GraphNode<L>) -> Result<()>;

    /// Removes a node together with all its incident edges.
    ///
    /// Fails with [`Error::NodeNotFound`] if the node is absent.
    fn remove_node(&mut self, node: &GraphNode<L>) -> Result<()>;

    /// Returns the stored node equal to `node`, if any.
    fn node(&self, node: &GraphNode<L>) -> Option<&GraphNode<L>>;

    /// All nodes, in insertion order.
    fn nodes(&self) -> Vec<&GraphNode<L>>;

    /// Inserts an edge, writing it symmetrically when the graph is undirected.
    ///
    /// Fails with [`Error::NodeNotFound`] if either endpoint is absent and
    /// with [`Error::DirectednessMismatch`] if the edge's directedness
    /// disagrees with the graph's. Returns `Ok(false)` without mutating when
    /// an equal edge is already present, `Ok(true)` otherwise.
    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool>;

    /// Removes an edge.
    ///
    /// Fails with [`Error::NodeNotFound`] if either endpoint is absent and
    /// with [`Error::EdgeNotFound`] if no such edge is stored.
    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<()>;

    /// The edge between two nodes, or `Ok(None)` when the nodes are present
    /// but not connected.
    fn edge_between(
        &self,
        node1: &GraphNode<L>,
        node2: &GraphNode<L>,
    ) -> Result<Option<&GraphEdge<L>>>;

    /// All edges, counting each undirected edge exactly once.
    fn edges(&self) -> Vec<&GraphEdge<L>>;

    /// Nodes connected to `node` by an edge.
    fn adjacent_nodes_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphNode<L>>>;

    /// Edges incident to `node`.
    fn edges_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphEdge<L>>>;

    // Label addressing. Each provided method wraps the label and delegates to
    // the node-addressed operation above.

    fn add_node_by_label(&mut self, label: L) -> Result<()> {
        self.add_node(GraphNode::new(label))
    }

    fn remove_node_by_label(&mut self, label: &L) -> Result<()> {
        self.remove_node(&GraphNode::new(label.clone()))
    }

    fn node_by_label(&self, label: &L) -> Option<&GraphNode<L>> {
        self.node(&GraphNode::new(label.clone()))
    }

    fn add_edge_between(&mut self, node1: &GraphNode<L>, node2: &GraphNode<L>) -> Result<bool> {
        let directed = self.is_directed();
        self.add_edge(GraphEdge::new(node1.clone(), node2.clone(), directed))
    }

    fn add_edge_by_labels(&mut self, label1: &L, label2: &L) -> Result<bool> {
        self.add_edge_between(
            &GraphNode::new(label1.clone()),
            &GraphNode::new(label2.clone()),
        )
    }

    /// Inserts a weighted edge between two present nodes.
    ///
    /// Fails with [`Error::NegativeWeight`] before touching the graph when the
    /// weight is negative.
    fn add_weighted_edge(
        &mut self,
        node1: &GraphNode<L>,
        node2: &GraphNode<L>,
        weight: f64,
    ) -> Result<bool> {
        if !(weight >= 0.0) {
            return Err(Error::NegativeWeight { weight });
        }
        let directed = self.is_directed();
        self.add_edge(GraphEdge::new_weighted(
            node1.clone(),
            node2.clone(),
            directed,
            weight,
        ))
    }

    fn add_weighted_edge_by_labels(&mut self, label1: &L, label2: &L, weight: f64) -> Result<bool> {
        self.add_weighted_edge(
            &GraphNode::new(label1.clone()),
            &GraphNode::new(label2.clone()),
            weight,
        )
    }

    fn remove_edge_between(&mut self, node1: &GraphNode<L>, node2: &GraphNode<L>) -> Result<()> {
        let directed = self.is_directed();
        self.remove_edge(&GraphEdge::new(node1.clone(), node2.clone(), directed))
    }

    fn remove_edge_by_labels(&mut self, label1: &L, label2: &L) -> Result<()> {
        self.remove_edge_between(
            &GraphNode::new(label1.clone()),
            &GraphNode::new(label2.clone()),
        )
    }

    fn edge_by_labels(&self, label1: &L, label2: &L) -> Result<Option<&GraphEdge<L>>> {
        self.edge_between(
            &GraphNode::new(label1.clone()),
            &GraphNode::new(label2.clone()),
        )
    }

    fn adjacent_nodes_of_label(&self, label: &L) -> Result<Vec<&GraphNode<L>>> {
        self.adjacent_nodes_of(&GraphNode::new(label.clone()))
    }

    fn edges_of_label(&self, label: &L) -> Result<Vec<&GraphEdge<L>>> {
        self.edges_of(&GraphNode::new(label.clone()))
    }
}

/// Dense integer addressing for representations that assign each node a
/// stable insertion-order index in `[0, n)`.
///
/// Index-addressed operations fail with [`Error::IndexOutOfRange`] outside
/// `[0, n)`; the mutating variants otherwise behave exactly like their
/// node-addressed counterparts.
pub trait IndexedGraph<L: Label>: Graph<L> {
    /// The index assigned to `node` at insertion time.
    ///
    /// Fails with [`Error::NodeNotFound`] if the node is absent.
    fn node_index_of(&self, node: &GraphNode<L>) -> Result<usize>;

    /// The node stored at index `i`.
    fn node_at(&self, i: usize) -> Result<&GraphNode<L>>;

    fn index_of_label(&self, label: &L) -> Result<usize> {
        self.node_index_of(&GraphNode::new(label.clone()))
    }

    fn remove_node_at(&mut self, i: usize) -> Result<()> {
        let node = self.node_at(i)?.clone();
        self.remove_node(&node)
    }

    fn add_edge_by_indices(&mut self, i: usize, j: usize) -> Result<bool> {
        let node1 = self.node_at(i)?.clone();
        let node2 = self.node_at(j)?.clone();
        self.add_edge_between(&node1, &node2)
    }

    fn add_weighted_edge_by_indices(&mut self, i: usize, j: usize, weight: f64) -> Result<bool> {
        let node1 = self.node_at(i)?.clone();
        let node2 = self.node_at(j)?.clone();
        self.add_weighted_edge(&node1, &node2, weight)
    }

    fn remove_edge_by_indices(&mut self, i: usize, j: usize) -> Result<()> {
        let node1 = self.node_at(i)?.clone();
        let node2 = self.node_at(j)?.clone();
        self.remove_edge_between(&node1, &node2)
    }

    fn edge_by_indices(&self, i: usize, j: usize) -> Result<Option<&GraphEdge<L>>> {
        let node1 = self.node_at(i)?.clone();
        let node2 = self.node_at(j)?.clone();
        self.edge_between(&node1, &node2)
    }

    fn adjacent_nodes_of_index(&self, i: usize) -> Result<Vec<&GraphNode<L>>> {
        let node = self.node_at(i)?.clone();
        self.adjacent_nodes_of(&node)
    }

    fn edges_of_index(&self, i: usize) -> Result<Vec<&GraphEdge<L>>> {
        let node = self.node_at(i)?.clone();
        self.edges_of(&node)
    }
}

/// Queries meaningful only on directed representations.
///
/// Undirected graphs do not implement this trait, so predecessor and ingoing
/// queries on them are rejected at compile time instead of failing at runtime.
pub trait Directed<L: Label>: Graph<L> {
    /// Nodes with an edge pointing at `node`.
    fn predecessor_nodes_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphNode<L>>>;

    /// Edges pointing at `node`.
    fn ingoing_edges_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphEdge<L>>>;

    fn predecessor_nodes_of_label(&self, label: &L) -> Result<Vec<&GraphNode<L>>> {
        self.predecessor_nodes_of(&GraphNode::new(label.clone()))
    }

    fn ingoing_edges_of_label(&self, label: &L) -> Result<Vec<&GraphEdge<L>>> {
        self.ingoing_edges_of(&GraphNode::new(label.clone()))
    }
}
