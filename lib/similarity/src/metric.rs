//! Pluggable similarity metrics
//!
//! The ranker only needs "a function taking dataset + two identifiers and
//! returning a score". [`SimilarityMetric`] is that capability; any
//! `Fn(&Dataset, &str, &str) -> Result<f64>` qualifies, so alternative
//! metrics can be supplied without touching the ranking code.

use prefx_core::{Dataset, Result};

/// Scores how alike two entities of a dataset are
///
/// Implementations must fail with
/// [`EntityNotFound`](prefx_core::Error::EntityNotFound) rather than treat a
/// missing identifier as an entity with no ratings.
pub trait SimilarityMetric: Sync {
    fn similarity(&self, dataset: &Dataset, a: &str, b: &str) -> Result<f64>;

    /// Short name used in log output
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> SimilarityMetric for F
where
    F: Fn(&Dataset, &str, &str) -> Result<f64> + Sync,
{
    fn similarity(&self, dataset: &Dataset, a: &str, b: &str) -> Result<f64> {
        self(dataset, a, b)
    }
}
