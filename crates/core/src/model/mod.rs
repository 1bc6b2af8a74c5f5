//! Model artifact boundary.
//!
//! The mortality classifier is trained elsewhere and treated as a black box.
//! [`RiskModel`] is the seam the scoring service talks to; the production
//! implementation is the gradient-boosted tree ensemble in [`gbdt`].

pub mod gbdt;
pub mod tree;

pub use gbdt::GradientBoostedModel;
pub use tree::{Node, Tree};

use crate::RiskResult;

/// A pre-trained binary classifier.
///
/// Implementations are read-only after construction and shared across
/// concurrent requests.
pub trait RiskModel: Send + Sync {
    /// Feature names in the exact order `predict_proba` expects its row.
    fn feature_names(&self) -> &[String];

    /// Class probabilities `[negative, positive]` for one feature row.
    ///
    /// # Errors
    /// Returns an error if the row does not match the declared schema or the
    /// model cannot produce a finite probability.
    fn predict_proba(&self, row: &[f64]) -> RiskResult<[f64; 2]>;
}
