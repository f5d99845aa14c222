//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while building or evaluating a decision tree.
#[derive(Debug, Error)]
pub enum ArborError {
    /// Invalid value passed for a configuration or training parameter.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Prediction was requested from a model that holds no tree.
    #[error("The model has not been fit, there is no tree to traverse.")]
    UnfittedModel,
    /// Traversal reached a column the metadata or input vector does not describe.
    #[error("Column {0} was reached during traversal, but the column metadata or input vector does not describe it.")]
    MissingColumnMeta(usize),
    /// A feature value fell outside every edge of an internal node.
    #[error("Unmatched split value {1} for column {0}, and no fallback hint is configured.")]
    UnmatchedSplitValue(String, f64),
}
