//! Storage location parsing
//!
//! Task payloads reference objects as `scheme://container/key`. The parser strips
//! the configured scheme prefix and splits the remainder on the first `/`: the
//! container is everything before it, the key is everything after and may itself
//! contain separators.

use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Reasons a storage path cannot be resolved to an object location
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location '{path}' does not start with '{scheme}'")]
    MissingScheme { path: String, scheme: String },

    #[error("Location '{0}' has an empty container name")]
    EmptyContainer(String),

    #[error("Location '{0}' does not name an object within the container")]
    MissingKey(String),
}

/// A resolved object location: container (bucket) and object key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub container: String,
    pub key: String,
}

impl Location {
    pub fn new(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.container, self.key)
    }
}

/// Parses storage paths for one scheme prefix (e.g. `gs://`).
#[derive(Debug, Clone)]
pub struct LocationParser {
    scheme: String,
}

impl LocationParser {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn parse(&self, path: &str) -> Result<Location, LocationError> {
        let remainder = path
            .strip_prefix(self.scheme.as_str())
            .ok_or_else(|| LocationError::MissingScheme {
                path: path.to_string(),
                scheme: self.scheme.clone(),
            })?;

        let (container, key) = remainder
            .split_once('/')
            .ok_or_else(|| LocationError::MissingKey(path.to_string()))?;

        if container.is_empty() {
            return Err(LocationError::EmptyContainer(path.to_string()));
        }
        if key.is_empty() {
            return Err(LocationError::MissingKey(path.to_string()));
        }

        Ok(Location::new(container, key))
    }
}

impl Default for LocationParser {
    fn default() -> Self {
        Self::new("gs://")
    }
}
