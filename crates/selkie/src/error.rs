pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] selkie_graphlib::Error),

    #[error("element {element} is already present in the forest")]
    AlreadyPresent { element: String },

    #[error("element {element} is not present in the forest")]
    NotPresent { element: String },

    #[error("minimum spanning forests are defined on undirected graphs only")]
    DirectedGraph,

    #[error("edge {edge} has no weight")]
    MissingWeight { edge: String },

    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: String, weight: f64 },
}
