//! Statement objects
//!
//! The "what" of a statement: an activity, another actor, a reference to an
//! already recorded statement, or an embedded sub statement. Mismatched
//! variants are always unequal, never an error.
//!
//! On the wire the variant is discriminated by "objectType", defaulting to
//! an activity when absent. Activities serialize without the tag (it is the
//! default); every other variant tags itself.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::actor::{Agent, Group};
use crate::statement::StatementReference;
use crate::sub_statement::SubStatement;

/// The object a statement is about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementObject {
    Activity(Activity),
    Agent(Agent),
    Group(Group),
    StatementRef(StatementReference),
    SubStatement(Box<SubStatement>),
}

const OBJECT_TYPES: &[&str] = &["Activity", "Agent", "Group", "StatementRef", "SubStatement"];

impl<'de> Deserialize<'de> for StatementObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let object_type = value
            .get("objectType")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Activity")
            .to_owned();

        let object = match object_type.as_str() {
            "Activity" => serde_json::from_value(value).map(Self::Activity),
            "Agent" => serde_json::from_value(value).map(Self::Agent),
            "Group" => serde_json::from_value(value).map(Self::Group),
            "StatementRef" => serde_json::from_value(value).map(Self::StatementRef),
            "SubStatement" => serde_json::from_value(value).map(Self::SubStatement),
            other => return Err(de::Error::unknown_variant(other, OBJECT_TYPES)),
        };
        object.map_err(de::Error::custom)
    }
}

impl From<Activity> for StatementObject {
    fn from(activity: Activity) -> Self {
        Self::Activity(activity)
    }
}

impl From<Agent> for StatementObject {
    fn from(agent: Agent) -> Self {
        Self::Agent(agent)
    }
}

impl From<Group> for StatementObject {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<StatementReference> for StatementObject {
    fn from(reference: StatementReference) -> Self {
        Self::StatementRef(reference)
    }
}

impl From<SubStatement> for StatementObject {
    fn from(sub_statement: SubStatement) -> Self {
        Self::SubStatement(Box::new(sub_statement))
    }
}
