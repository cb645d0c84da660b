//! Aggregated person view of an agent
//!
//! The Agents resource answers a lookup for one agent with a "person"
//! object: every name and identifier the system has seen for that agent,
//! collected into parallel lists.

use serde::{Deserialize, Serialize};

use crate::actor::{Account, Agent, InverseFunctionalIdentifier};
use crate::iri::Iri;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum PersonTag {
    #[default]
    Person,
}

/// All names and identifiers known for one agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, rename = "objectType")]
    object_type: PersonTag,
    #[serde(default, rename = "name", skip_serializing_if = "Vec::is_empty")]
    names: Vec<String>,
    #[serde(default, rename = "mbox", skip_serializing_if = "Vec::is_empty")]
    mboxes: Vec<Iri>,
    #[serde(
        default,
        rename = "mbox_sha1sum",
        skip_serializing_if = "Vec::is_empty"
    )]
    mbox_sha1_sums: Vec<String>,
    #[serde(default, rename = "openid", skip_serializing_if = "Vec::is_empty")]
    open_ids: Vec<String>,
    #[serde(default, rename = "account", skip_serializing_if = "Vec::is_empty")]
    accounts: Vec<Account>,
}

impl Person {
    /// Build the person view from the agents known to describe one person.
    ///
    /// Each agent contributes its fields that are present, in input order;
    /// absent fields contribute nothing.
    pub fn from_agents(agents: &[Agent]) -> Self {
        let mut person = Self::default();
        for agent in agents {
            if let Some(name) = agent.name() {
                person.names.push(name.to_string());
            }
            match agent.ifi() {
                InverseFunctionalIdentifier::Mbox(mbox) => person.mboxes.push(mbox.clone()),
                InverseFunctionalIdentifier::MboxSha1Sum(hash) => {
                    person.mbox_sha1_sums.push(hash.clone());
                }
                InverseFunctionalIdentifier::OpenId(open_id) => {
                    person.open_ids.push(open_id.clone());
                }
                InverseFunctionalIdentifier::Account(account) => {
                    person.accounts.push(account.clone());
                }
            }
        }
        person
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn mboxes(&self) -> &[Iri] {
        &self.mboxes
    }

    pub fn mbox_sha1_sums(&self) -> &[String] {
        &self.mbox_sha1_sums
    }

    pub fn open_ids(&self) -> &[String] {
        &self.open_ids
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
