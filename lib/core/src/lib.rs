//! # prefx Core
//!
//! Core data structures for the prefx similarity engine.
//!
//! - [`Dataset`] - Read-only mapping of entity -> item -> rating
//! - [`Ratings`] - One entity's item -> rating mapping
//! - [`Error`] - Identifier-not-found and loading errors
//!
//! ## Example
//!
//! ```rust
//! use prefx_core::Dataset;
//!
//! let mut dataset = Dataset::new();
//! dataset.rate("alice", "dune", 4.5);
//! dataset.rate("alice", "solaris", 3.0);
//! dataset.rate("bob", "dune", 5.0);
//!
//! let shared = dataset.shared_items("alice", "bob").unwrap();
//! assert_eq!(shared, vec!["dune"]);
//! assert!(dataset.ratings("carol").is_err());
//! ```

pub mod dataset;
pub mod error;

pub use dataset::{Dataset, Ratings};
pub use error::{Error, Result};
