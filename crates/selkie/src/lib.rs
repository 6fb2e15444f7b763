#![forbid(unsafe_code)]

//! Minimum spanning forests over weighted undirected graphs.
//!
//! `selkie` pairs a disjoint-set forest (path compression + union by rank)
//! with Kruskal's greedy edge selection, on top of the graph containers in
//! `selkie-graphlib`.

pub use selkie_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod disjoint_sets;
pub mod error;
pub mod kruskal;

pub use disjoint_sets::DisjointSetForest;
pub use error::{Error, Result};
pub use kruskal::{EdgeSet, minimum_spanning_forest};
