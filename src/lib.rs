pub mod dataset;
pub mod error;
pub mod eval;
pub mod knn;

pub use dataset::{load_table, Dataset};
pub use error::{Error, Result};
pub use eval::{ConfusionMatrix, Evaluation};
pub use knn::{classify_batch, evaluate};

pub type Feature = f32;
pub type Label = usize;
