//! Pearson correlation over shared items
//!
//! Scores how alike two entities' preferences are, using only the items both
//! have rated. The result is conventionally in [-1.0, 1.0] but is not clamped.

use prefx_core::{Dataset, Result};

use crate::metric::SimilarityMetric;

/// Pearson correlation as a [`SimilarityMetric`]. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pearson;

impl SimilarityMetric for Pearson {
    fn similarity(&self, dataset: &Dataset, a: &str, b: &str) -> Result<f64> {
        sim_pearson(dataset, a, b)
    }

    fn name(&self) -> &str {
        "pearson"
    }
}

/// Running sums over the shared-item set
#[derive(Debug, Default)]
struct Sums {
    n: f64,
    sum1: f64,
    sum2: f64,
    sum1_sq: f64,
    sum2_sq: f64,
    p_sum: f64,
}

impl Sums {
    #[inline]
    fn push(&mut self, x: f64, y: f64) {
        self.n += 1.0;
        self.sum1 += x;
        self.sum2 += y;
        self.sum1_sq += x * x;
        self.sum2_sq += y * y;
        self.p_sum += x * y;
    }

    fn correlation(&self) -> f64 {
        if self.n == 0.0 {
            return 0.0;
        }

        let num = self.p_sum - (self.sum1 * self.sum2 / self.n);
        let den = ((self.sum1_sq - self.sum1 * self.sum1 / self.n)
            * (self.sum2_sq - self.sum2 * self.sum2 / self.n))
            .sqrt();

        // A rounding-negative variance product yields NaN from sqrt; treat it
        // like zero variance.
        if den == 0.0 || den.is_nan() {
            return 0.0;
        }

        num / den
    }
}

/// Pearson correlation between entities `a` and `b`
///
/// Returns 0.0 when they share no items or when either side has zero
/// variance over the shared items. Fails with
/// [`EntityNotFound`](prefx_core::Error::EntityNotFound) if either
/// identifier is missing from the dataset.
pub fn sim_pearson(dataset: &Dataset, a: &str, b: &str) -> Result<f64> {
    let ratings_a = dataset.ratings(a)?;
    let ratings_b = dataset.ratings(b)?;

    let mut pairs: Vec<(&str, f64, f64)> = ratings_a
        .iter()
        .filter_map(|(item, &x)| ratings_b.get(item).map(|&y| (item.as_str(), x, y)))
        .collect();
    // Fixed summation order, independent of hash iteration order
    pairs.sort_unstable_by(|l, r| l.0.cmp(r.0));

    let mut sums = Sums::default();
    for &(_, x, y) in &pairs {
        sums.push(x, y);
    }

    Ok(sums.correlation())
}
