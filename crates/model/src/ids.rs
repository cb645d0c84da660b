//! Statement identifier type

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

/// The UUID identifying a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatementId(Uuid);

impl StatementId {
    /// Generate a fresh random statement id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a statement id from its hyphenated UUID text.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidId` if the value is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ModelError::invalid_id(value))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for StatementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for StatementId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<StatementId> for Uuid {
    fn from(value: StatementId) -> Self {
        value.0
    }
}
