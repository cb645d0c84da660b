//! Documents stored alongside the statement stream
//!
//! A learning record store keeps arbitrary keyed documents scoped to an
//! activity, an agent, or a state. The document body is a read-only
//! key-value payload ([`DocumentData`]); the wrapper types pair it with the
//! owning key context and forward reads to it. There is no sanctioned
//! mutation path: a new document replaces the old one wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::activity::Activity;
use crate::actor::Agent;
use crate::error::ModelError;

// ============================================================================
// DocumentData
// ============================================================================

/// The read-only body of a stored document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentData {
    entries: HashMap<String, serde_json::Value>,
}

impl DocumentData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Look up the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if no entry exists for `key`.
    pub fn get(&self, key: &str) -> Result<&serde_json::Value, ModelError> {
        self.entries
            .get(key)
            .ok_or_else(|| ModelError::missing_key("document data", key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// State
// ============================================================================

/// The owning key context of a state document: which activity, which agent,
/// which state id, optionally scoped to a registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    activity: Activity,
    agent: Agent,
    #[serde(rename = "stateId")]
    state_id: String,
    #[serde(
        default,
        rename = "registrationId",
        skip_serializing_if = "Option::is_none"
    )]
    registration_id: Option<Uuid>,
}

impl State {
    pub fn new(activity: Activity, agent: Agent, state_id: impl Into<String>) -> Self {
        Self {
            activity,
            agent,
            state_id: state_id.into(),
            registration_id: None,
        }
    }

    /// Returns a new state scoped to the given registration.
    pub fn with_registration_id(&self, registration_id: Uuid) -> Self {
        let mut state = self.clone();
        state.registration_id = Some(registration_id);
        state
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn state_id(&self) -> &str {
        &self.state_id
    }

    pub fn registration_id(&self) -> Option<&Uuid> {
        self.registration_id.as_ref()
    }
}

/// A state document: a state key context plus its read-only data
#[derive(Debug, Clone, PartialEq)]
pub struct StateDocument {
    state: State,
    data: DocumentData,
}

impl StateDocument {
    pub fn new(state: State, data: DocumentData) -> Self {
        Self { state, data }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn data(&self) -> &DocumentData {
        &self.data
    }

    /// Look up the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if no entry exists for `key`.
    pub fn get(&self, key: &str) -> Result<&serde_json::Value, ModelError> {
        self.data.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }
}

// ============================================================================
// Agent profile
// ============================================================================

/// The owning key context of an agent profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    #[serde(rename = "profileId")]
    profile_id: String,
    agent: Agent,
}

impl AgentProfile {
    pub fn new(profile_id: impl Into<String>, agent: Agent) -> Self {
        Self {
            profile_id: profile_id.into(),
            agent,
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

/// An agent profile document: a profile key context plus its read-only data
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfileDocument {
    profile: AgentProfile,
    data: DocumentData,
}

impl AgentProfileDocument {
    pub fn new(profile: AgentProfile, data: DocumentData) -> Self {
        Self { profile, data }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn data(&self) -> &DocumentData {
        &self.data
    }

    /// Look up the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if no entry exists for `key`.
    pub fn get(&self, key: &str) -> Result<&serde_json::Value, ModelError> {
        self.data.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }
}

// ============================================================================
// Activity profile
// ============================================================================

/// The owning key context of an activity profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    #[serde(rename = "profileId")]
    profile_id: String,
    activity: Activity,
}

impl ActivityProfile {
    pub fn new(profile_id: impl Into<String>, activity: Activity) -> Self {
        Self {
            profile_id: profile_id.into(),
            activity,
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }
}

/// An activity profile document: a profile key context plus its read-only
/// data
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityProfileDocument {
    profile: ActivityProfile,
    data: DocumentData,
}

impl ActivityProfileDocument {
    pub fn new(profile: ActivityProfile, data: DocumentData) -> Self {
        Self { profile, data }
    }

    pub fn profile(&self) -> &ActivityProfile {
        &self.profile
    }

    pub fn data(&self) -> &DocumentData {
        &self.data
    }

    /// Look up the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if no entry exists for `key`.
    pub fn get(&self, key: &str) -> Result<&serde_json::Value, ModelError> {
        self.data.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::InverseFunctionalIdentifier;
    use crate::iri::Iri;

    fn test_activity() -> Activity {
        Activity::new(Iri::new("http://tincanapi.com/conformancetest/activityid").unwrap())
    }

    fn test_agent() -> Agent {
        Agent::new(InverseFunctionalIdentifier::with_mbox(
            Iri::new("mailto:conformancetest@tincanapi.com").unwrap(),
        ))
    }

    fn test_data() -> DocumentData {
        DocumentData::from_entries([("x", "foo"), ("y", "bar")])
    }

    mod document_data {
        use super::*;

        #[test]
        fn get_returns_the_stored_value() {
            let data = test_data();
            assert_eq!(data.get("x").unwrap(), &serde_json::json!("foo"));
            assert_eq!(data.get("y").unwrap(), &serde_json::json!("bar"));
        }

        #[test]
        fn get_fails_for_a_missing_key() {
            let data = test_data();
            let result = data.get("z");
            assert!(matches!(result, Err(ModelError::MissingKey { .. })));
        }

        #[test]
        fn has_reports_presence() {
            let data = test_data();
            assert!(data.has("x"));
            assert!(!data.has("z"));
        }

        #[test]
        fn equality_ignores_insertion_order() {
            let a = DocumentData::from_entries([("x", "foo"), ("y", "bar")]);
            let b = DocumentData::from_entries([("y", "bar"), ("x", "foo")]);
            assert_eq!(a, b);
        }

        #[test]
        fn serializes_as_a_plain_object() {
            let data = DocumentData::from_entries([("x", "foo")]);
            assert_eq!(
                serde_json::to_value(data).unwrap(),
                serde_json::json!({"x": "foo"})
            );
        }
    }

    mod state {
        use super::*;

        #[test]
        fn registration_defaults_to_absent() {
            let state = State::new(test_activity(), test_agent(), "state-id");
            assert_eq!(state.state_id(), "state-id");
            assert!(state.registration_id().is_none());
        }

        #[test]
        fn with_registration_id_leaves_receiver_unchanged() {
            let state = State::new(test_activity(), test_agent(), "state-id");
            let registration = Uuid::parse_str("16fd2706-8baf-433b-82eb-8c7fada847da").unwrap();
            let scoped = state.with_registration_id(registration);

            assert!(state.registration_id().is_none());
            assert_eq!(scoped.registration_id(), Some(&registration));
        }
    }

    mod state_document {
        use super::*;

        fn document() -> StateDocument {
            StateDocument::new(
                State::new(test_activity(), test_agent(), "state-id"),
                test_data(),
            )
        }

        #[test]
        fn reading_forwards_to_the_data() {
            let document = document();
            assert_eq!(document.get("x").unwrap(), &serde_json::json!("foo"));
            assert!(document.has("y"));
            assert!(!document.has("z"));
        }

        #[test]
        fn get_fails_for_a_missing_key() {
            assert!(matches!(
                document().get("z"),
                Err(ModelError::MissingKey { .. })
            ));
        }

        #[test]
        fn exposes_its_state() {
            assert_eq!(document().state().state_id(), "state-id");
        }
    }

    mod agent_profile_document {
        use super::*;

        #[test]
        fn reading_forwards_to_the_data() {
            let document = AgentProfileDocument::new(
                AgentProfile::new("profile-id", test_agent()),
                test_data(),
            );
            assert_eq!(document.profile().profile_id(), "profile-id");
            assert_eq!(document.get("x").unwrap(), &serde_json::json!("foo"));
            assert!(!document.has("z"));
        }
    }

    mod activity_profile_document {
        use super::*;

        #[test]
        fn reading_forwards_to_the_data() {
            let document = ActivityProfileDocument::new(
                ActivityProfile::new("profile-id", test_activity()),
                test_data(),
            );
            assert_eq!(document.profile().profile_id(), "profile-id");
            assert_eq!(document.get("y").unwrap(), &serde_json::json!("bar"));
            assert!(document.has("x"));
        }
    }
}
