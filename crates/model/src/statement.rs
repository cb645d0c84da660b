//! Statements, the root record of the model
//!
//! A statement records "actor verb object" plus optional result, context,
//! authority, timestamps, and attachments. Statements are immutable;
//! the withers return a new statement and, for optional fields, clear the
//! field when given `None`.
//!
//! Equality is structural over the whole graph with one exception: the
//! protocol `version` never takes part, so two statements differing only in
//! version are equal. Timestamps compare by instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::attachment::Attachment;
use crate::context::Context;
use crate::error::ModelError;
use crate::ids::StatementId;
use crate::result::ActivityResult;
use crate::statement_object::StatementObject;
use crate::verb::Verb;

// ============================================================================
// StatementReference
// ============================================================================

/// A pointer to another statement by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StatementReferenceWire", into = "StatementReferenceWire")]
pub struct StatementReference {
    id: StatementId,
}

impl StatementReference {
    pub fn new(id: StatementId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> StatementId {
        self.id
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
enum StatementReferenceTag {
    StatementRef,
}

#[derive(Serialize, Deserialize)]
struct StatementReferenceWire {
    #[serde(rename = "objectType", default, skip_serializing_if = "Option::is_none")]
    object_type: Option<StatementReferenceTag>,
    id: StatementId,
}

impl From<StatementReferenceWire> for StatementReference {
    fn from(wire: StatementReferenceWire) -> Self {
        Self { id: wire.id }
    }
}

impl From<StatementReference> for StatementReferenceWire {
    fn from(reference: StatementReference) -> Self {
        Self {
            object_type: Some(StatementReferenceTag::StatementRef),
            id: reference.id,
        }
    }
}

// ============================================================================
// Statement
// ============================================================================

/// An experience record: who did what to which object, and under which
/// circumstances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<StatementId>,
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<ActivityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authority: Option<Actor>,
    #[serde(default, rename = "timestamp", skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stored: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl Statement {
    pub fn new(id: Option<StatementId>, actor: Actor, verb: Verb, object: StatementObject) -> Self {
        Self {
            id,
            actor,
            verb,
            object,
            result: None,
            authority: None,
            created: None,
            stored: None,
            context: None,
            attachments: None,
            version: None,
        }
    }

    /// Returns a new statement with the id replaced, or cleared for `None`.
    pub fn with_id(&self, id: Option<StatementId>) -> Self {
        let mut statement = self.clone();
        statement.id = id;
        statement
    }

    pub fn with_actor(&self, actor: Actor) -> Self {
        let mut statement = self.clone();
        statement.actor = actor;
        statement
    }

    pub fn with_verb(&self, verb: Verb) -> Self {
        let mut statement = self.clone();
        statement.verb = verb;
        statement
    }

    pub fn with_object(&self, object: StatementObject) -> Self {
        let mut statement = self.clone();
        statement.object = object;
        statement
    }

    pub fn with_result(&self, result: Option<ActivityResult>) -> Self {
        let mut statement = self.clone();
        statement.result = result;
        statement
    }

    /// Returns a new statement with the authority replaced unconditionally.
    pub fn with_authority(&self, authority: Option<Actor>) -> Self {
        let mut statement = self.clone();
        statement.authority = authority;
        statement
    }

    pub fn with_created(&self, created: Option<DateTime<Utc>>) -> Self {
        let mut statement = self.clone();
        statement.created = created;
        statement
    }

    pub fn with_stored(&self, stored: Option<DateTime<Utc>>) -> Self {
        let mut statement = self.clone();
        statement.stored = stored;
        statement
    }

    pub fn with_context(&self, context: Option<Context>) -> Self {
        let mut statement = self.clone();
        statement.context = context;
        statement
    }

    pub fn with_attachments(&self, attachments: Option<Vec<Attachment>>) -> Self {
        let mut statement = self.clone();
        statement.attachments = attachments;
        statement
    }

    pub fn with_version(&self, version: Option<String>) -> Self {
        let mut statement = self.clone();
        statement.version = version;
        statement
    }

    pub fn id(&self) -> Option<StatementId> {
        self.id
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    pub fn object(&self) -> &StatementObject {
        &self.object
    }

    pub fn result(&self) -> Option<&ActivityResult> {
        self.result.as_ref()
    }

    pub fn authority(&self) -> Option<&Actor> {
        self.authority.as_ref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn stored(&self) -> Option<DateTime<Utc>> {
        self.stored
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True when this statement voids another one.
    pub fn is_void_statement(&self) -> bool {
        self.verb.is_void_verb()
    }

    /// Derive a reference to this statement.
    ///
    /// # Errors
    ///
    /// Fails when the statement has no id to point at.
    pub fn statement_reference(&self) -> Result<StatementReference, ModelError> {
        let id = self.id.ok_or_else(|| {
            ModelError::validation("a statement without an id cannot be referenced")
        })?;
        Ok(StatementReference::new(id))
    }

    /// Derive a new statement voiding this one, issued by the given actor.
    ///
    /// # Errors
    ///
    /// Fails when this statement has no id to reference.
    pub fn void_statement(&self, voiding_actor: Actor) -> Result<Statement, ModelError> {
        Ok(Self::new(
            None,
            voiding_actor,
            Verb::voided(),
            StatementObject::StatementRef(self.statement_reference()?),
        ))
    }
}

// version is excluded: statements differing only in protocol version are
// equal.
impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.actor == other.actor
            && self.verb == other.verb
            && self.object == other.object
            && self.result == other.result
            && self.authority == other.authority
            && self.created == other.created
            && self.stored == other.stored
            && self.context == other.context
            && self.attachments == other.attachments
    }
}
