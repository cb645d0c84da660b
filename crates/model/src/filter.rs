//! Statement query filters
//!
//! [`StatementsFilter`] accumulates the criteria of a statements query as
//! ordered key-value pairs, using the query parameter names of the xAPI
//! statements resource verbatim. Unlike the value objects in the rest of
//! this crate it mutates in place and returns `&mut Self` for chaining;
//! concurrent writers need external synchronization.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::activity::Activity;
use crate::actor::Actor;
use crate::error::ModelError;
use crate::verb::Verb;

/// A single filter criterion value
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// An actor to match, kept structured so the query layer can encode it
    Actor(Actor),
    Text(String),
    Number(i32),
}

/// An accumulating description of a statements query
#[derive(Debug, Clone, Default)]
pub struct StatementsFilter {
    criteria: Vec<(&'static str, FilterValue)>,
}

impl StatementsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by the statements' actor.
    pub fn by_actor(&mut self, actor: &Actor) -> &mut Self {
        self.insert("agent", FilterValue::Actor(actor.clone()))
    }

    /// Filter by verb id.
    pub fn by_verb(&mut self, verb: &Verb) -> &mut Self {
        self.insert("verb", FilterValue::Text(verb.id().as_str().to_string()))
    }

    /// Filter by activity id.
    pub fn by_activity(&mut self, activity: &Activity) -> &mut Self {
        self.insert(
            "activity",
            FilterValue::Text(activity.id().as_str().to_string()),
        )
    }

    /// Filter by registration.
    pub fn by_registration(&mut self, registration: Uuid) -> &mut Self {
        self.insert("registration", FilterValue::Text(registration.to_string()))
    }

    /// Match the activity filter against related activities too.
    pub fn enable_related_activity_filter(&mut self) -> &mut Self {
        self.insert("related_activities", FilterValue::Text("true".to_string()))
    }

    /// Match the activity filter against the statements' activity only.
    pub fn disable_related_activity_filter(&mut self) -> &mut Self {
        self.insert("related_activities", FilterValue::Text("false".to_string()))
    }

    /// Match the agent filter against related agents too.
    pub fn enable_related_agent_filter(&mut self) -> &mut Self {
        self.insert("related_agents", FilterValue::Text("true".to_string()))
    }

    /// Match the agent filter against the statements' actor only.
    pub fn disable_related_agent_filter(&mut self) -> &mut Self {
        self.insert("related_agents", FilterValue::Text("false".to_string()))
    }

    /// Only match statements stored at or after the given instant.
    ///
    /// The instant is encoded immediately, not when the query runs.
    pub fn since(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.insert("since", FilterValue::Text(timestamp.to_rfc3339()))
    }

    /// Only match statements stored at or before the given instant.
    ///
    /// The instant is encoded immediately, not when the query runs.
    pub fn until(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.insert("until", FilterValue::Text(timestamp.to_rfc3339()))
    }

    /// Return results in ascending order of stored time.
    pub fn ascending(&mut self) -> &mut Self {
        self.insert("ascending", FilterValue::Text("true".to_string()))
    }

    /// Return results in descending order of stored time.
    pub fn descending(&mut self) -> &mut Self {
        self.insert("ascending", FilterValue::Text("false".to_string()))
    }

    /// Cap the number of results.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` for a negative limit.
    pub fn limit(&mut self, limit: i32) -> Result<&mut Self, ModelError> {
        if limit < 0 {
            return Err(ModelError::validation(
                "limit must be a non-negative integer",
            ));
        }
        Ok(self.insert("limit", FilterValue::Number(limit)))
    }

    /// The accumulated criteria, in insertion order.
    pub fn criteria(&self) -> &[(&'static str, FilterValue)] {
        &self.criteria
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.criteria
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    fn insert(&mut self, key: &'static str, value: FilterValue) -> &mut Self {
        match self.criteria.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.criteria.push((key, value)),
        }
        self
    }
}
