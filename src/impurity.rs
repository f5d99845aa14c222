//! Impurity measures
//!
//! Scoring strategies that quantify class heterogeneity of a label
//! distribution and the information gain of a candidate split. The set of
//! measures is closed and selected through [`crate::config::TreeConfig`].
use crate::segment::{segment_range, Segment};
use crate::utils::{distinct, min_max, round_places};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Number of decimal places gains are rounded to before comparison.
const GAIN_PLACES: u32 = 4;

/// Impurity scoring strategy for a label distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ImpurityMeasure {
    /// Shannon entropy, `-sum(p * log2(p))` over the observed class
    /// proportions. Ranges from 0 (pure) to `log2(k)` for `k` classes.
    Entropy,
    /// Misclassification error, `1 - max(p)`. Ranges from 0 (pure) to
    /// `1 - 1/k` for `k` classes.
    Misclassification,
}

impl ImpurityMeasure {
    /// Impurity of a label distribution. Zero means pure.
    pub fn calculate(&self, y: &[f64]) -> f64 {
        if y.is_empty() {
            return 0.0;
        }
        let n = y.len() as f64;
        let mut counts: HashMap<u64, usize> = HashMap::new();
        for v in y {
            *counts.entry(v.to_bits()).or_insert(0) += 1;
        }
        match self {
            ImpurityMeasure::Entropy => counts
                .values()
                .map(|&c| {
                    let p = c as f64 / n;
                    -p * p.log2()
                })
                .sum(),
            ImpurityMeasure::Misclassification => {
                let max_p = counts.values().map(|&c| c as f64 / n).fold(0.0, f64::max);
                1.0 - max_p
            }
        }
    }

    /// Information gain of splitting on a discrete column.
    ///
    /// Parent impurity minus the size weighted impurity of the children,
    /// one child per distinct value observed in the column. The result is
    /// rounded to four decimal places so that comparisons between columns
    /// are stable across floating point noise.
    ///
    /// * `y` - Label values.
    /// * `feature` - Feature column values, aligned with `y`.
    pub fn gain(&self, y: &[f64], feature: &[f64]) -> f64 {
        let parent = self.calculate(y);
        let n = y.len() as f64;
        let mut weighted = 0.0;
        for value in distinct(feature) {
            let child: Vec<f64> = y
                .iter()
                .zip(feature)
                .filter(|(_, f)| **f == value)
                .map(|(l, _)| *l)
                .collect();
            weighted += child.len() as f64 / n * self.calculate(&child);
        }
        round_places(parent - weighted, GAIN_PLACES)
    }

    /// Information gain of splitting a continuous column into `width`
    /// equal buckets over its observed range.
    ///
    /// Returns both the gain and the segments that were scored, since the
    /// builder needs the same boundaries to construct edges. A column with
    /// a single observed value yields a zero gain and one point segment,
    /// which disqualifies it as a winning candidate.
    ///
    /// * `y` - Label values.
    /// * `feature` - Feature column values, aligned with `y`.
    /// * `width` - Number of buckets to segment the range into.
    pub fn segmented_gain(&self, y: &[f64], feature: &[f64], width: usize) -> (f64, Vec<Segment>) {
        let Some((lo, hi)) = min_max(feature) else {
            return (0.0, Vec::new());
        };
        let segments = segment_range(lo, hi, width);
        if segments.len() < 2 {
            return (0.0, segments);
        }
        let parent = self.calculate(y);
        let n = y.len() as f64;
        let mut weighted = 0.0;
        for segment in &segments {
            let child: Vec<f64> = y
                .iter()
                .zip(feature)
                .filter(|(_, f)| segment.contains(**f))
                .map(|(l, _)| *l)
                .collect();
            weighted += child.len() as f64 / n * self.calculate(&child);
        }
        (round_places(parent - weighted, GAIN_PLACES), segments)
    }
}
