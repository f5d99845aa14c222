//! Fitted tree model
//!
//! Read only traversal over a completed tree. A fitted model is immutable,
//! so it is safe to share across threads and serve unlimited concurrent
//! predictions without locking.
use crate::data::{ColumnMeta, Matrix};
use crate::errors::ArborError;
use crate::node::Node;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A fitted decision tree.
///
/// Produced by [`crate::builder::TreeBuilder::fit`]; the default value is
/// an unfit model that rejects predictions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeModel {
    root: Option<Node>,
    columns: Vec<ColumnMeta>,
    hint: Option<f64>,
}

impl TreeModel {
    pub(crate) fn new(root: Node, columns: Vec<ColumnMeta>, hint: Option<f64>) -> Self {
        TreeModel {
            root: Some(root),
            columns,
            hint,
        }
    }

    /// The root node, if the model has been fit.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Predict the label for a single feature vector.
    ///
    /// Walks from the root taking the first edge whose segment matches the
    /// vector's value at the node's split column. When no edge matches,
    /// the configured hint is returned if one is set, otherwise the
    /// offending column and value are reported as an error.
    ///
    /// * `row` - Feature values, in the column order the tree was fit on.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, ArborError> {
        let mut node = self.root.as_ref().ok_or(ArborError::UnfittedModel)?;
        while !node.is_leaf {
            let column = node.column;
            if column >= self.columns.len() || column >= row.len() {
                return Err(ArborError::MissingColumnMeta(column));
            }
            let value = row[column];
            match node.edges.iter().find(|e| e.matches(value)) {
                Some(edge) => node = &edge.child,
                None => {
                    return match self.hint {
                        Some(hint) => Ok(hint),
                        None => Err(ArborError::UnmatchedSplitValue(
                            self.columns[column].name.clone(),
                            value,
                        )),
                    }
                }
            }
        }
        Ok(node.value)
    }

    /// Predict a label for every row of a matrix.
    ///
    /// Rows are evaluated in parallel; the tree itself is never mutated.
    ///
    /// * `data` - Feature matrix with the same column layout as training.
    pub fn predict(&self, data: &Matrix<f64>) -> Result<Vec<f64>, ArborError> {
        (0..data.rows)
            .into_par_iter()
            .map(|i| self.predict_row(&data.get_row(i)))
            .collect()
    }
}

impl Display for TreeModel {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => fmt_node(f, root, 0),
            None => writeln!(f, "<unfit tree>"),
        }
    }
}

/// Write one node and its subtree as an indented diagnostic dump.
fn fmt_node(f: &mut fmt::Formatter, node: &Node, indent: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{}", "", node, indent = indent * 2)?;
    for edge in &node.edges {
        writeln!(f, "{:indent$}{}", "", edge.label, indent = (indent + 1) * 2)?;
        fmt_node(f, &edge.child, indent + 2)?;
    }
    Ok(())
}
