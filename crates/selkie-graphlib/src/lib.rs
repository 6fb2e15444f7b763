#![forbid(unsafe_code)]

//! Weighted undirected graph containers used by `selkie`.
//!
//! The crate provides immutable node/edge value types, capability traits
//! splitting the graph surface by what a representation can actually do, and
//! an indexed adjacency-matrix implementation for undirected graphs.

pub mod adjacency_matrix;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;

pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use edge::GraphEdge;
pub use error::{Error, Result};
pub use graph::{Directed, Graph, IndexedGraph};
pub use node::{GraphNode, Label};
