//! Validated IRI and IRL identifier types
//!
//! xAPI identifies verbs, activities, extension keys, and attachment usage
//! types by IRI, and locates resources by IRL. Both are validated at
//! construction and store the original text verbatim: parsing is used as a
//! syntax check only, never to normalize, so equality and wire output always
//! see the exact string the caller supplied.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::ModelError;

// ============================================================================
// Iri
// ============================================================================

/// A validated Internationalized Resource Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(String);

impl Iri {
    /// Create a new validated IRI.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidIri` if the value is not an absolute,
    /// syntactically well-formed IRI.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if Url::parse(&value).is_err() {
            return Err(ModelError::invalid_iri(value));
        }
        Ok(Self(value))
    }

    /// Returns the IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Iri {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> String {
        iri.0
    }
}

// ============================================================================
// Irl
// ============================================================================

/// A validated Internationalized Resource Locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Irl(String);

impl Irl {
    /// Create a new validated IRL.
    ///
    /// Locators may be server relative (a statement result's "more" path is
    /// one), so an absolute path reference is accepted alongside absolute
    /// URLs.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidIrl` if the value is neither a
    /// well-formed absolute IRL nor an absolute path reference.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !Self::is_well_formed(&value) {
            return Err(ModelError::invalid_irl(value));
        }
        Ok(Self(value))
    }

    fn is_well_formed(value: &str) -> bool {
        match Url::parse(value) {
            Ok(_) => true,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                value.starts_with('/')
                    && Url::parse("http://localhost")
                        .and_then(|base| base.join(value))
                        .is_ok()
            }
            Err(_) => false,
        }
    }

    /// Returns the IRL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Irl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Irl {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Irl> for String {
    fn from(irl: Irl) -> String {
        irl.0
    }
}
