//! Tree induction
//!
//! Recursive construction of a decision tree. At each node the builder
//! scores every column not yet used on the current path, partitions the
//! row indices along the best scoring one, and recurses into each
//! partition until a stopping condition fires.
use crate::config::TreeConfig;
use crate::data::{ColumnMeta, Matrix};
use crate::errors::ArborError;
use crate::model::TreeModel;
use crate::node::{Edge, Node};
use crate::segment::Segment;
use crate::utils::{distinct, mode};
use hashbrown::HashSet;
use log::info;

/// Winning candidate of one node's split search.
struct SplitCandidate {
    column: usize,
    gain: f64,
    segments: Vec<Segment>,
}

/// Grows a [`TreeModel`] from a feature matrix and aligned labels.
pub struct TreeBuilder {
    columns: Vec<ColumnMeta>,
    config: TreeConfig,
}

impl TreeBuilder {
    /// Create a builder over the given column schema.
    ///
    /// * `columns` - Metadata for every feature column, in matrix order.
    /// * `config` - Tree growth configuration, validated here.
    pub fn new(columns: Vec<ColumnMeta>, config: TreeConfig) -> Result<Self, ArborError> {
        config.validate()?;
        Ok(TreeBuilder { columns, config })
    }

    /// Fit a tree on the given data.
    ///
    /// The matrix and labels are only read. Construction is a single
    /// depth first pass; the finished tree is immutable and safe for
    /// concurrent prediction.
    ///
    /// * `data` - Feature matrix, rows are examples.
    /// * `y` - Label values, one per row.
    pub fn fit(&self, data: &Matrix<f64>, y: &[f64]) -> Result<TreeModel, ArborError> {
        if data.rows == 0 || y.is_empty() {
            return Err(ArborError::InvalidParameter(
                "rows".to_string(),
                "at least one training row".to_string(),
                "0".to_string(),
            ));
        }
        if data.cols != self.columns.len() || y.len() != data.rows {
            return Err(ArborError::InvalidParameter(
                "data".to_string(),
                format!("a matrix with {} columns and one label per row", self.columns.len()),
                format!("{} columns and {} labels for {} rows", data.cols, y.len(), data.rows),
            ));
        }

        let index: Vec<usize> = (0..data.rows).collect();
        let used = HashSet::new();
        let root = self.grow(data, y, &index, self.config.depth, &used);

        let (n_nodes, n_leaves, depth) = describe(&root);
        info!("fit tree with {} nodes, {} leaves, depth {}", n_nodes, n_leaves, depth);

        Ok(TreeModel::new(root, self.columns.clone(), self.config.hint))
    }

    fn grow(
        &self,
        data: &Matrix<f64>,
        y: &[f64],
        index: &[usize],
        remaining: usize,
        used: &HashSet<usize>,
    ) -> Node {
        let labels: Vec<f64> = index.iter().map(|&i| y[i]).collect();
        if remaining == 0 || distinct(&labels).len() <= 1 {
            return leaf(&labels);
        }
        let Some(winner) = self.best_split(data, &labels, index, used) else {
            return leaf(&labels);
        };

        // Each path gets its own copy of the used set. Sharing a mutable
        // set would let a later sibling see columns consumed by an earlier
        // one and silently shrink its candidate pool.
        let mut child_used = used.clone();
        child_used.insert(winner.column);

        let discrete = self.columns[winner.column].discrete;
        let mut edges = Vec::with_capacity(winner.segments.len());
        for segment in &winner.segments {
            let child_index: Vec<usize> = index
                .iter()
                .copied()
                .filter(|&i| segment.contains(*data.get(i, winner.column)))
                .collect();
            if child_index.is_empty() {
                // An unpopulated bucket gets no edge. Predictions landing
                // in it fall through to the hint policy.
                continue;
            }
            let child = self.grow(data, y, &child_index, remaining - 1, &child_used);
            edges.push(Edge {
                discrete,
                min: segment.min,
                max: segment.max,
                label: edge_label(discrete, segment),
                child,
            });
        }
        Node::internal(winner.column, &self.columns[winner.column].name, winner.gain, edges)
    }

    /// Score every unused column and return the best usable split.
    ///
    /// A candidate must carry a strictly positive gain and more than one
    /// segment. Ties keep the first encountered, so the lowest column
    /// index wins deterministically.
    fn best_split(
        &self,
        data: &Matrix<f64>,
        labels: &[f64],
        index: &[usize],
        used: &HashSet<usize>,
    ) -> Option<SplitCandidate> {
        let mut best: Option<SplitCandidate> = None;
        for column in 0..data.cols {
            if used.contains(&column) {
                continue;
            }
            let feature: Vec<f64> = index.iter().map(|&i| *data.get(i, column)).collect();
            let (gain, segments) = if self.columns[column].discrete {
                let gain = self.config.impurity.gain(labels, &feature);
                let segments = distinct(&feature).into_iter().map(Segment::point).collect();
                (gain, segments)
            } else {
                self.config.impurity.segmented_gain(labels, &feature, self.config.width)
            };
            if gain <= 0.0 || segments.len() < 2 {
                continue;
            }
            match &best {
                Some(b) if gain <= b.gain => {}
                _ => best = Some(SplitCandidate { column, gain, segments }),
            }
        }
        best
    }
}

/// Build a leaf predicting the mode of the label subset.
fn leaf(labels: &[f64]) -> Node {
    // The terminal conditions never produce an empty label subset.
    debug_assert!(!labels.is_empty(), "leaf built from an empty label subset");
    Node::leaf(mode(labels).unwrap_or(f64::NAN))
}

fn edge_label(discrete: bool, segment: &Segment) -> String {
    if discrete {
        format!("== {}", segment.min)
    } else {
        format!("[{:.4}, {:.4})", segment.min, segment.max)
    }
}

/// Node count, leaf count and depth of a subtree.
fn describe(node: &Node) -> (usize, usize, usize) {
    if node.is_leaf {
        return (1, 1, 0);
    }
    let mut n_nodes = 1;
    let mut n_leaves = 0;
    let mut depth = 0;
    for edge in &node.edges {
        let (n, l, d) = describe(&edge.child);
        n_nodes += n;
        n_leaves += l;
        depth = depth.max(d + 1);
    }
    (n_nodes, n_leaves, depth)
}
