//! Statement query results
//!
//! A page of statements as returned by a learning record store, together
//! with the server-relative path of the next page when the result was cut
//! off.

use serde::{Deserialize, Serialize};

use crate::iri::Irl;
use crate::statement::Statement;

/// An ordered page of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    statements: Vec<Statement>,
    #[serde(default, rename = "more", skip_serializing_if = "Option::is_none")]
    more_url_path: Option<Irl>,
}

impl StatementResult {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            more_url_path: None,
        }
    }

    /// Returns a new result pointing at the next page.
    pub fn with_more_url_path(&self, more_url_path: Irl) -> Self {
        Self {
            statements: self.statements.clone(),
            more_url_path: Some(more_url_path),
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn more_url_path(&self) -> Option<&Irl> {
        self.more_url_path.as_ref()
    }
}
