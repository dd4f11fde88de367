//! # prefx Similarity
//!
//! Pairwise similarity and top-N ranking over sparse rating data.
//!
//! - [`sim_pearson`] / [`Pearson`] - Pearson correlation restricted to the
//!   items two entities have both rated
//! - [`SimilarityMetric`] - the capability the ranker is generic over
//! - [`top_matches`] / [`Ranker`] - rank every other entity by similarity to
//!   a reference entity, scores rounded to two decimals
//!
//! ## Example
//!
//! ```rust
//! use prefx_core::Dataset;
//! use prefx_similarity::{sim_pearson, top_matches, Pearson};
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "A": {"x": 3.0, "y": 4.0},
//!     "B": {"x": 3.0, "y": 4.0},
//!     "C": {"x": 1.0, "y": 5.0}
//! }"#).unwrap();
//!
//! assert!((sim_pearson(&dataset, "A", "B").unwrap() - 1.0).abs() < 1e-9);
//!
//! let matches = top_matches(&dataset, "A", 2, &Pearson).unwrap();
//! assert_eq!(matches.len(), 2);
//! ```

pub mod metric;
pub mod pearson;
pub mod rank;

pub use metric::SimilarityMetric;
pub use pearson::{sim_pearson, Pearson};
pub use rank::{
    round_score, top_matches, top_matches_default, top_matches_par, Match, MatchConfig, Ranker,
    DEFAULT_LIMIT,
};
