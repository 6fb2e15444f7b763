//! Node value type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Bound required of node labels throughout the workspace.
///
/// Blanket-implemented for every eligible type; `Debug` feeds error messages.
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// An immutable graph node identified by its label.
///
/// Two nodes are equal iff their labels are equal; the label cannot change
/// after construction.
#[derive(Debug, Clone)]
pub struct GraphNode<L: Label> {
    label: L,
}

impl<L: Label> GraphNode<L> {
    pub fn new(label: L) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L: Label> PartialEq for GraphNode<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<L: Label> Eq for GraphNode<L> {}

impl<L: Label> Hash for GraphNode<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<L: Label> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.label)
    }
}
