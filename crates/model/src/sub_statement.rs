//! Sub statements
//!
//! A sub statement is a statement-shaped object embedded as another
//! statement's object. It carries no id, authority, stored timestamp, or
//! version, and its own object must not be a sub statement: nesting stops at
//! one level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::attachment::Attachment;
use crate::context::Context;
use crate::error::ModelError;
use crate::result::ActivityResult;
use crate::statement_object::StatementObject;
use crate::verb::Verb;

/// A statement embedded as the object of another statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubStatementWire", into = "SubStatementWire")]
pub struct SubStatement {
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    result: Option<ActivityResult>,
    context: Option<Context>,
    created: Option<DateTime<Utc>>,
    attachments: Option<Vec<Attachment>>,
}

impl SubStatement {
    /// Create a sub statement.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` when `object` is itself a sub
    /// statement.
    pub fn new(actor: Actor, verb: Verb, object: StatementObject) -> Result<Self, ModelError> {
        Self::reject_nesting(&object)?;
        Ok(Self {
            actor,
            verb,
            object,
            result: None,
            context: None,
            created: None,
            attachments: None,
        })
    }

    fn reject_nesting(object: &StatementObject) -> Result<(), ModelError> {
        if matches!(object, StatementObject::SubStatement(_)) {
            return Err(ModelError::validation(
                "a sub statement cannot contain another sub statement",
            ));
        }
        Ok(())
    }

    pub fn with_actor(&self, actor: Actor) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.actor = actor;
        sub_statement
    }

    pub fn with_verb(&self, verb: Verb) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.verb = verb;
        sub_statement
    }

    /// Returns a new sub statement with the object replaced.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` when `object` is itself a sub
    /// statement.
    pub fn with_object(&self, object: StatementObject) -> Result<Self, ModelError> {
        Self::reject_nesting(&object)?;
        let mut sub_statement = self.clone();
        sub_statement.object = object;
        Ok(sub_statement)
    }

    pub fn with_result(&self, result: Option<ActivityResult>) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.result = result;
        sub_statement
    }

    pub fn with_context(&self, context: Option<Context>) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.context = context;
        sub_statement
    }

    pub fn with_created(&self, created: Option<DateTime<Utc>>) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.created = created;
        sub_statement
    }

    pub fn with_attachments(&self, attachments: Option<Vec<Attachment>>) -> Self {
        let mut sub_statement = self.clone();
        sub_statement.attachments = attachments;
        sub_statement
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

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    /// True when this sub statement voids another statement.
    pub fn is_void_statement(&self) -> bool {
        self.verb.is_void_verb()
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
enum SubStatementTag {
    SubStatement,
}

#[derive(Serialize, Deserialize)]
struct SubStatementWire {
    #[serde(rename = "objectType", default, skip_serializing_if = "Option::is_none")]
    object_type: Option<SubStatementTag>,
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<ActivityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
    #[serde(default, rename = "timestamp", skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
}

impl TryFrom<SubStatementWire> for SubStatement {
    type Error = ModelError;

    fn try_from(wire: SubStatementWire) -> Result<Self, Self::Error> {
        SubStatement::reject_nesting(&wire.object)?;
        Ok(Self {
            actor: wire.actor,
            verb: wire.verb,
            object: wire.object,
            result: wire.result,
            context: wire.context,
            created: wire.created,
            attachments: wire.attachments,
        })
    }
}

impl From<SubStatement> for SubStatementWire {
    fn from(sub_statement: SubStatement) -> Self {
        Self {
            object_type: Some(SubStatementTag::SubStatement),
            actor: sub_statement.actor,
            verb: sub_statement.verb,
            object: sub_statement.object,
            result: sub_statement.result,
            context: sub_statement.context,
            created: sub_statement.created,
            attachments: sub_statement.attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::actor::{Agent, InverseFunctionalIdentifier};
    use crate::iri::Iri;

    fn test_actor() -> Actor {
        Agent::new(InverseFunctionalIdentifier::with_mbox(
            Iri::new("mailto:conformancetest@tincanapi.com").unwrap(),
        ))
        .into()
    }

    fn test_verb() -> Verb {
        Verb::new(Iri::new("http://tincanapi.com/conformancetest/verbid").unwrap())
    }

    fn test_object() -> StatementObject {
        Activity::new(Iri::new("http://tincanapi.com/conformancetest/activityid").unwrap()).into()
    }

    fn minimal_sub_statement() -> SubStatement {
        SubStatement::new(test_actor(), test_verb(), test_object()).unwrap()
    }

    #[test]
    fn minimal_sub_statement_has_no_optional_parts() {
        let sub_statement = minimal_sub_statement();
        assert_eq!(sub_statement.actor(), &test_actor());
        assert!(sub_statement.result().is_none());
        assert!(sub_statement.context().is_none());
        assert!(sub_statement.created().is_none());
        assert!(sub_statement.attachments().is_none());
    }

    #[test]
    fn nesting_a_sub_statement_fails() {
        let inner = minimal_sub_statement();
        let result = SubStatement::new(test_actor(), test_verb(), inner.into());
        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[test]
    fn with_object_rejects_a_sub_statement() {
        let sub_statement = minimal_sub_statement();
        let inner = minimal_sub_statement();
        assert!(sub_statement.with_object(inner.into()).is_err());
    }

    #[test]
    fn with_context_leaves_receiver_unchanged() {
        let sub_statement = minimal_sub_statement();
        let contextualized = sub_statement.with_context(Some(Context::new()));

        assert!(sub_statement.context().is_none());
        assert!(contextualized.context().is_some());
    }

    #[test]
    fn equal_field_wise() {
        assert_eq!(minimal_sub_statement(), minimal_sub_statement());
    }

    #[test]
    fn context_presence_mismatch_is_unequal() {
        let bare = minimal_sub_statement();
        let contextualized = bare.with_context(Some(Context::new()));
        assert_ne!(bare, contextualized);
    }

    #[test]
    fn void_verb_is_reported() {
        let voiding =
            SubStatement::new(test_actor(), Verb::voided(), test_object()).unwrap();
        assert!(voiding.is_void_statement());
        assert!(!minimal_sub_statement().is_void_statement());
    }

    #[test]
    fn serializes_with_object_type_and_timestamp() {
        let created = chrono::DateTime::parse_from_rfc3339("2013-05-18T05:32:34Z")
            .unwrap()
            .with_timezone(&Utc);
        let sub_statement = minimal_sub_statement().with_created(Some(created));

        let json = serde_json::to_value(&sub_statement).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "objectType": "SubStatement",
                "actor": {
                    "objectType": "Agent",
                    "mbox": "mailto:conformancetest@tincanapi.com"
                },
                "verb": {"id": "http://tincanapi.com/conformancetest/verbid"},
                "object": {"id": "http://tincanapi.com/conformancetest/activityid"},
                "timestamp": "2013-05-18T05:32:34Z"
            })
        );

        let back: SubStatement = serde_json::from_value(json).unwrap();
        assert_eq!(back, sub_statement);
    }

    #[test]
    fn deserializing_a_nested_sub_statement_fails() {
        let result: Result<SubStatement, _> = serde_json::from_value(serde_json::json!({
            "objectType": "SubStatement",
            "actor": {"mbox": "mailto:conformancetest@tincanapi.com"},
            "verb": {"id": "http://tincanapi.com/conformancetest/verbid"},
            "object": {
                "objectType": "SubStatement",
                "actor": {"mbox": "mailto:conformancetest@tincanapi.com"},
                "verb": {"id": "http://tincanapi.com/conformancetest/verbid"},
                "object": {"id": "http://tincanapi.com/conformancetest/activityid"}
            }
        }));
        assert!(result.is_err());
    }
}
