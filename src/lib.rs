//! # prefx
//!
//! Similarity scoring and top-N matching over sparse, partially-overlapping
//! rating data. The statistical core of a "people who liked this also liked"
//! recommendation mechanism.
//!
//! ## Quick Start
//!
//! ### As a Library
//!
//! ```rust
//! use prefx::prelude::*;
//!
//! let mut dataset = Dataset::new();
//! dataset.rate("alice", "dune", 4.5);
//! dataset.rate("alice", "ubik", 2.0);
//! dataset.rate("alice", "solaris", 3.5);
//! dataset.rate("bob", "dune", 5.0);
//! dataset.rate("bob", "ubik", 1.5);
//! dataset.rate("bob", "solaris", 4.0);
//! dataset.rate("carol", "dune", 1.0);
//! dataset.rate("carol", "ubik", 4.0);
//!
//! let score = sim_pearson(&dataset, "alice", "bob").unwrap();
//! assert!(score > 0.9);
//!
//! let matches = top_matches(&dataset, "alice", 3, &Pearson).unwrap();
//! assert_eq!(matches[0].entity, "bob");
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! prefx --data critics.json --entity alice --limit 5
//! ```
//!
//! ## Crate Structure
//!
//! - [`prefx-core`](https://docs.rs/prefx-core) - Rating datasets and errors
//! - [`prefx-similarity`](https://docs.rs/prefx-similarity) - Pearson similarity and ranking

// Re-export core types
pub use prefx_core::{Dataset, Error, Ratings, Result};

// Re-export similarity
pub use prefx_similarity::{
    round_score, sim_pearson, top_matches, top_matches_default, top_matches_par, Match,
    MatchConfig, Pearson, Ranker, SimilarityMetric, DEFAULT_LIMIT,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sim_pearson, top_matches, top_matches_default, Dataset, Error, Match, MatchConfig,
        Pearson, Ranker, Result, SimilarityMetric,
    };
}
