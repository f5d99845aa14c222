// Modules
pub mod builder;
pub mod config;
pub mod data;
pub mod errors;
pub mod impurity;
pub mod model;
pub mod node;
pub mod segment;
pub mod utils;

// Individual classes, and functions
pub use builder::TreeBuilder;
pub use config::TreeConfig;
pub use data::{ColumnMeta, Matrix};
pub use impurity::ImpurityMeasure;
pub use model::TreeModel;
