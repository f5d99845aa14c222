use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A node in a fitted tree.
///
/// A leaf carries a meaningful `value` and no edges. An internal node
/// carries the winning `column`, the gain of that split, and one edge per
/// non empty partition. Nodes are created once during construction and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Whether this node is a leaf.
    pub is_leaf: bool,
    /// Index of the split column. Only meaningful on internal nodes.
    pub column: usize,
    /// Information gain of the chosen split, kept for diagnostics.
    pub gain: f64,
    /// Column name on internal nodes, empty on leaves.
    pub name: String,
    /// Display text for dumps.
    pub label: String,
    /// Leaf prediction. NaN on internal nodes, where it is never read.
    pub value: f64,
    /// Outgoing edges, one per child partition. Empty on leaves.
    pub edges: Vec<Edge>,
}

/// A branch from an internal node to the child covering one segment.
///
/// Each edge exclusively owns its child; ownership flows strictly
/// downward from the root, so the structure is a rooted tree with no
/// shared children and no cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Whether the owning node split on a discrete column.
    pub discrete: bool,
    /// Lower bound of the covered segment, or the categorical value.
    pub min: f64,
    /// Exclusive upper bound of the covered segment.
    pub max: f64,
    /// Display text for dumps.
    pub label: String,
    /// The child node this edge leads to.
    pub child: Node,
}

impl Node {
    /// Create a leaf predicting `value`.
    pub fn leaf(value: f64) -> Self {
        Node {
            is_leaf: true,
            column: 0,
            gain: 0.0,
            name: String::new(),
            label: "leaf".to_string(),
            value,
            edges: Vec::new(),
        }
    }

    /// Create an internal node splitting on `column`.
    pub fn internal(column: usize, name: &str, gain: f64, edges: Vec<Edge>) -> Self {
        Node {
            is_leaf: false,
            column,
            gain,
            name: name.to_string(),
            label: name.to_string(),
            value: f64::NAN,
            edges,
        }
    }
}

impl Edge {
    /// Get whether a feature value travels down this edge.
    ///
    /// A discrete edge matches on equality with the stored value; a
    /// continuous edge covers the half open range `[min, max)`.
    pub fn matches(&self, value: f64) -> bool {
        if self.discrete {
            value == self.min
        } else {
            self.min <= value && value < self.max
        }
    }
}

impl Display for Node {
    // This trait requires `fmt` with this exact signature.
    // An internal node shows its column name and gain, a leaf shows its
    // label and value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_leaf {
            write!(f, "{}={}", self.label, self.value)
        } else {
            write!(f, "[{}] gain={}", self.name, self.gain)
        }
    }
}
