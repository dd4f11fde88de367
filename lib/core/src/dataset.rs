//! Rating datasets
//!
//! A [`Dataset`] maps entity identifiers (users, items, ...) to the ratings
//! each entity has given. It is owned by the caller and only borrowed by the
//! similarity and ranking code, which never mutates it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Ratings given by a single entity, keyed by item identifier
pub type Ratings = HashMap<String, f64, ahash::RandomState>;

/// Mapping of entity -> item -> rating
///
/// Serializes to and from the natural JSON shape:
///
/// ```json
/// {"alice": {"dune": 4.5, "solaris": 3.0}, "bob": {"dune": 5.0}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    entities: HashMap<String, Ratings, ahash::RandomState>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from a JSON string and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a dataset from any JSON reader and validate it
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file on disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Insert (or replace) all ratings of one entity
    pub fn insert(&mut self, entity: impl Into<String>, ratings: Ratings) -> Option<Ratings> {
        self.entities.insert(entity.into(), ratings)
    }

    /// Record a single rating, creating the entity if needed
    pub fn rate(&mut self, entity: impl Into<String>, item: impl Into<String>, rating: f64) {
        self.entities
            .entry(entity.into())
            .or_default()
            .insert(item.into(), rating);
    }

    /// Ratings of `entity`, or [`Error::EntityNotFound`] if it is not in the dataset
    pub fn ratings(&self, entity: &str) -> Result<&Ratings> {
        self.entities
            .get(entity)
            .ok_or_else(|| Error::EntityNotFound(entity.to_string()))
    }

    #[inline]
    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity identifiers, in no particular order
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ratings)> {
        self.entities.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Items rated by both `a` and `b`, sorted by item identifier
    ///
    /// The sort keeps downstream floating-point sums independent of hash
    /// iteration order.
    pub fn shared_items(&self, a: &str, b: &str) -> Result<Vec<&str>> {
        let ratings_a = self.ratings(a)?;
        let ratings_b = self.ratings(b)?;

        let mut shared: Vec<&str> = ratings_a
            .keys()
            .filter(|item| ratings_b.contains_key(item.as_str()))
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        Ok(shared)
    }

    /// Swap the roles of entities and items
    ///
    /// A user -> item -> rating dataset becomes item -> user -> rating, so the
    /// same ranking code answers "which items are alike".
    #[must_use]
    pub fn transpose(&self) -> Dataset {
        let mut transposed = Dataset::new();
        for (entity, ratings) in &self.entities {
            for (item, &rating) in ratings {
                transposed.rate(item.clone(), entity.clone(), rating);
            }
        }
        transposed
    }

    /// Reject NaN and infinite ratings
    pub fn validate(&self) -> Result<()> {
        for (entity, ratings) in &self.entities {
            if let Some((item, _)) = ratings.iter().find(|(_, r)| !r.is_finite()) {
                return Err(Error::InvalidRating {
                    entity: entity.clone(),
                    item: item.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<HashMap<String, HashMap<String, f64>>> for Dataset {
    fn from(map: HashMap<String, HashMap<String, f64>>) -> Self {
        map.into_iter()
            .map(|(entity, ratings)| (entity, ratings.into_iter().collect::<Ratings>()))
            .collect()
    }
}

impl FromIterator<(String, Ratings)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, Ratings)>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}
