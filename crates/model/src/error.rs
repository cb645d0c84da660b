//! Unified error type for the model layer
//!
//! Every constructor and lookup in this crate fails through [`ModelError`].
//! All failures are raised synchronously at the point of violation; no
//! partially constructed value is ever observable.

use thiserror::Error;

/// Unified error type for model construction and lookups
#[derive(Debug, Error, Clone)]
pub enum ModelError {
    /// Invariant violation (e.g., nested sub statements, negative limit)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Malformed IRI text
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Malformed IRL text
    #[error("Invalid IRL: {0}")]
    InvalidIrl(String),

    /// Malformed statement id (not a UUID)
    #[error("Invalid statement id: {0}")]
    InvalidId(String),

    /// Lookup of a key that is not present in a keyed container
    #[error("No entry found for key \"{key}\" in {container}")]
    MissingKey {
        container: &'static str,
        key: String,
    },
}

impl ModelError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value-object invariant cannot be satisfied:
    /// - A sub statement is given another sub statement as its object
    /// - A filter limit is negative
    /// - An attachment carries neither a file URL nor inline content
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid IRI error
    pub fn invalid_iri(value: impl Into<String>) -> Self {
        Self::InvalidIri(value.into())
    }

    /// Create an invalid IRL error
    pub fn invalid_irl(value: impl Into<String>) -> Self {
        Self::InvalidIrl(value.into())
    }

    /// Create an invalid statement id error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId(value.into())
    }

    /// Create a missing key error for a keyed container lookup
    pub fn missing_key(container: &'static str, key: impl Into<String>) -> Self {
        Self::MissingKey {
            container,
            key: key.into(),
        }
    }
}
