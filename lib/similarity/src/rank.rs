//! Top-N similarity ranking
//!
//! Scores every other entity of a dataset against a reference entity with a
//! [`SimilarityMetric`], rounds the scores to two decimals and returns the
//! best `n` in descending order.

use crate::metric::SimilarityMetric;
use crate::pearson::Pearson;
use ordered_float::OrderedFloat;
use prefx_core::{Dataset, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Number of matches returned when the caller does not ask for a count
pub const DEFAULT_LIMIT: usize = 3;

/// One ranked entity and its rounded similarity to the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub score: f64,
    pub entity: String,
}

impl Match {
    /// The `(score, entity)` pair form
    pub fn into_pair(self) -> (f64, String) {
        (self.score, self.entity)
    }
}

/// Configuration for a [`Ranker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of matches to return
    pub limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Round a similarity score to two decimal places
///
/// Rounds the exact binary value, with exact halves going to the even digit
/// (0.125 -> 0.12, 0.7949999999999999 -> 0.79). Rounding happens before
/// sorting, so entities whose scores differ only past the second decimal are
/// ties.
#[inline]
pub fn round_score(score: f64) -> f64 {
    // Float formatting is correctly rounded, half to even
    format!("{:.2}", score).parse().unwrap_or(score)
}

type Scored<'a> = (OrderedFloat<f64>, &'a str);

fn score_against<'a, M: SimilarityMetric + ?Sized>(
    dataset: &Dataset,
    reference: &str,
    other: &'a str,
    metric: &M,
) -> Result<Scored<'a>> {
    let raw = metric.similarity(dataset, reference, other)?;
    trace!(reference, other, raw, "scored");
    Ok((OrderedFloat(round_score(raw)), other))
}

/// Sort descending by score, ties broken by descending entity identifier,
/// then keep the first `n`
fn rank(mut scored: Vec<Scored<'_>>, n: usize) -> Vec<Match> {
    scored.sort_unstable_by(|a, b| b.cmp(a));
    scored
        .into_iter()
        .take(n)
        .map(|(score, entity)| Match {
            score: score.into_inner(),
            entity: entity.to_string(),
        })
        .collect()
}

/// Shared ranking pipeline; `score_all` decides how the candidates are scored
fn ranked<'a, M, F>(
    dataset: &'a Dataset,
    reference: &str,
    n: usize,
    metric: &M,
    mode: &str,
    score_all: F,
) -> Result<Vec<Match>>
where
    M: SimilarityMetric + ?Sized,
    F: FnOnce(Vec<&'a str>) -> Result<Vec<Scored<'a>>>,
{
    dataset.ratings(reference)?;
    let others: Vec<&str> = dataset
        .entities()
        .filter(|&other| other != reference)
        .collect();
    debug!(
        reference,
        candidates = others.len(),
        metric = metric.name(),
        mode,
        "ranking"
    );

    let matches = rank(score_all(others)?, n);
    debug!(reference, returned = matches.len(), "ranked");
    Ok(matches)
}

/// The `n` entities most similar to `reference`, best first
///
/// The reference itself is never included. Every other entity is scored even
/// when `n` is 0, so a metric error always aborts the whole call.
/// Fails with [`EntityNotFound`](prefx_core::Error::EntityNotFound) if
/// `reference` is not in the dataset.
pub fn top_matches<M: SimilarityMetric + ?Sized>(
    dataset: &Dataset,
    reference: &str,
    n: usize,
    metric: &M,
) -> Result<Vec<Match>> {
    ranked(dataset, reference, n, metric, "sequential", |others| {
        others
            .into_iter()
            .map(|other| score_against(dataset, reference, other, metric))
            .collect()
    })
}

/// [`top_matches`] with Pearson similarity and [`DEFAULT_LIMIT`]
pub fn top_matches_default(dataset: &Dataset, reference: &str) -> Result<Vec<Match>> {
    top_matches(dataset, reference, DEFAULT_LIMIT, &Pearson)
}

/// [`top_matches`] with the pairwise scores computed on the rayon pool
///
/// Produces exactly the same output as the sequential version.
pub fn top_matches_par<M: SimilarityMetric + ?Sized>(
    dataset: &Dataset,
    reference: &str,
    n: usize,
    metric: &M,
) -> Result<Vec<Match>> {
    ranked(dataset, reference, n, metric, "parallel", |others| {
        others
            .into_par_iter()
            .map(|other| score_against(dataset, reference, other, metric))
            .collect()
    })
}

/// A similarity metric bundled with ranking configuration
#[derive(Debug, Clone)]
pub struct Ranker<M = Pearson> {
    metric: M,
    config: MatchConfig,
}

impl Default for Ranker<Pearson> {
    fn default() -> Self {
        Self::new(Pearson)
    }
}

impl<M: SimilarityMetric> Ranker<M> {
    /// Create a ranker with the given metric and the default configuration
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            config: MatchConfig::default(),
        }
    }

    pub fn with_config(metric: M, config: MatchConfig) -> Self {
        Self { metric, config }
    }

    /// Same ranker, returning at most `limit` matches
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn top_matches(&self, dataset: &Dataset, reference: &str) -> Result<Vec<Match>> {
        top_matches(dataset, reference, self.config.limit, &self.metric)
    }

    pub fn top_matches_par(&self, dataset: &Dataset, reference: &str) -> Result<Vec<Match>> {
        top_matches_par(dataset, reference, self.config.limit, &self.metric)
    }
}
