pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("node {node} is already present in the graph")]
    DuplicateNode { node: String },

    #[error("node {node} is not part of the graph")]
    NodeNotFound { node: String },

    #[error("edge {edge} is not part of the graph")]
    EdgeNotFound { edge: String },

    #[error("edge weight {weight} is negative")]
    NegativeWeight { weight: f64 },

    #[error("edge directedness does not match the graph")]
    DirectednessMismatch,

    #[error("node index {index} is out of range for a graph with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
}
