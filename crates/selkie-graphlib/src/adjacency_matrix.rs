//! Undirected graph backed by a symmetric adjacency matrix.

use rustc_hash::FxBuildHasher;

use crate::edge::GraphEdge;
use crate::error::{Error, Result};
use crate::graph::{Graph, IndexedGraph};
use crate::node::{GraphNode, Label};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// An undirected graph that assigns each node a dense insertion-order index
/// and stores edges in an `n × n` matrix of optional edge values.
///
/// Cell `(i, j)` is `None` when the nodes at indices `i` and `j` are not
/// connected; otherwise it holds the connecting [`GraphEdge`], and cell
/// `(j, i)` holds an equal value. Removing a node splices its row and column
/// out of the matrix and renumbers every higher index down by one, preserving
/// relative order, so the index set is always exactly `{0, …, n-1}`.
///
/// Node and edge lookups are O(1) amortized through the index map; node
/// removal is O(n) because of the renumbering. That cost is part of the
/// contract of this representation, not an accident.
pub struct AdjacencyMatrixGraph<L: Label> {
    nodes: Vec<GraphNode<L>>,
    node_index: HashMap<GraphNode<L>, usize>,
    matrix: Vec<Vec<Option<GraphEdge<L>>>>,
}

impl<L: Label> AdjacencyMatrixGraph<L> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            matrix: Vec::new(),
        }
    }

    fn index_of(&self, node: &GraphNode<L>) -> Result<usize> {
        self.node_index
            .get(node)
            .copied()
            .ok_or_else(|| not_found(node))
    }

    fn check_index(&self, i: usize) -> Result<usize> {
        if i >= self.nodes.len() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.nodes.len(),
            });
        }
        Ok(i)
    }
}

impl<L: Label> Default for AdjacencyMatrixGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<L: Label>(node: &GraphNode<L>) -> Error {
    Error::NodeNotFound {
        node: format!("{:?}", node.label()),
    }
}

impl<L: Label> Graph<L> for AdjacencyMatrixGraph<L> {
    fn is_directed(&self) -> bool {
        false
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        // Each undirected edge occupies two symmetric cells; walk the upper
        // triangle so it is counted once.
        let mut count = 0;
        for (i, row) in self.matrix.iter().enumerate() {
            for cell in row.iter().skip(i) {
                if cell.is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.matrix.clear();
    }

    fn add_node(&mut self, node: GraphNode<L>) -> Result<()> {
        if self.node_index.contains_key(&node) {
            return Err(Error::DuplicateNode {
                node: format!("{:?}", node.label()),
            });
        }
        let idx = self.nodes.len();
        self.node_index.insert(node.clone(), idx);
        self.nodes.push(node);
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; idx + 1]);
        Ok(())
    }

    fn remove_node(&mut self, node: &GraphNode<L>) -> Result<()> {
        let Some(idx) = self.node_index.remove(node) else {
            return Err(not_found(node));
        };

        self.nodes.remove(idx);
        for i in idx..self.nodes.len() {
            if let Some(v) = self.node_index.get_mut(&self.nodes[i]) {
                *v = i;
            }
        }

        self.matrix.remove(idx);
        for row in &mut self.matrix {
            row.remove(idx);
        }
        Ok(())
    }

    fn node(&self, node: &GraphNode<L>) -> Option<&GraphNode<L>> {
        self.node_index.get(node).map(|&idx| &self.nodes[idx])
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool> {
        let i1 = self.index_of(edge.node1())?;
        let i2 = self.index_of(edge.node2())?;
        if edge.is_directed() != self.is_directed() {
            return Err(Error::DirectednessMismatch);
        }

        if let Some(existing) = &self.matrix[i1][i2] {
            if *existing == edge {
                return Ok(false);
            }
        }

        self.matrix[i1][i2] = Some(edge.clone());
        self.matrix[i2][i1] = Some(edge);
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<()> {
        let i1 = self.index_of(edge.node1())?;
        let i2 = self.index_of(edge.node2())?;
        if self.matrix[i1][i2].is_none() {
            return Err(Error::EdgeNotFound {
                edge: edge.to_string(),
            });
        }
        self.matrix[i1][i2] = None;
        self.matrix[i2][i1] = None;
        Ok(())
    }

    fn edge_between(
        &self,
        node1: &GraphNode<L>,
        node2: &GraphNode<L>,
    ) -> Result<Option<&GraphEdge<L>>> {
        let i1 = self.index_of(node1)?;
        let i2 = self.index_of(node2)?;
        Ok(self.matrix[i1][i2].as_ref())
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        let mut out = Vec::new();
        for (i, row) in self.matrix.iter().enumerate() {
            for cell in row.iter().skip(i) {
                if let Some(edge) = cell {
                    out.push(edge);
                }
            }
        }
        out
    }

    fn adjacent_nodes_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphNode<L>>> {
        let i = self.index_of(node)?;
        Ok(self.matrix[i]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(j, _)| &self.nodes[j])
            .collect())
    }

    fn edges_of(&self, node: &GraphNode<L>) -> Result<Vec<&GraphEdge<L>>> {
        let i = self.index_of(node)?;
        Ok(self.matrix[i].iter().filter_map(|cell| cell.as_ref()).collect())
    }
}

impl<L: Label> IndexedGraph<L> for AdjacencyMatrixGraph<L> {
    fn node_index_of(&self, node: &GraphNode<L>) -> Result<usize> {
        self.index_of(node)
    }

    fn node_at(&self, i: usize) -> Result<&GraphNode<L>> {
        let i = self.check_index(i)?;
        Ok(&self.nodes[i])
    }
}
