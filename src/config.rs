//! Tree configuration
//!
//! Defines the recognized options for growing a tree and their validation.
use crate::errors::ArborError;
use crate::impurity::ImpurityMeasure;
use serde::{Deserialize, Serialize};

/// Configuration for growing a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum recursion depth. A depth of 0 produces a single leaf
    /// predicting the mode of the labels.
    pub depth: usize,
    /// Number of buckets used to segment a continuous column. Must be at
    /// least 2.
    pub width: usize,
    /// Impurity measure used to score candidate splits.
    pub impurity: ImpurityMeasure,
    /// Fallback prediction returned when no edge matches at predict time.
    /// When unset, an unmatched value is an error.
    pub hint: Option<f64>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            depth: 8,
            width: 4,
            impurity: ImpurityMeasure::Entropy,
            hint: None,
        }
    }
}

impl TreeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // Set methods for parameters

    /// Set the maximum recursion depth.
    /// * `depth` - Maximum recursion depth of the tree.
    pub fn set_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the number of buckets used for continuous columns.
    /// * `width` - Number of buckets to segment a continuous range into.
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the impurity measure.
    /// * `impurity` - The measure used to score candidate splits.
    pub fn set_impurity(mut self, impurity: ImpurityMeasure) -> Self {
        self.impurity = impurity;
        self
    }

    /// Set the fallback prediction hint.
    /// * `hint` - Value returned when no edge matches an input.
    pub fn set_hint(mut self, hint: f64) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ArborError> {
        if self.width < 2 {
            return Err(ArborError::InvalidParameter(
                "width".to_string(),
                "an integer of at least 2".to_string(),
                self.width.to_string(),
            ));
        }
        Ok(())
    }
}
