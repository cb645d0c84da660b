//! Actors and their identifying attributes
//!
//! An actor is the "who" of a statement: a single [`Agent`] or a [`Group`].
//! Agents are identified by exactly one inverse functional identifier; a
//! group may carry one too, or may be anonymous and identified only by its
//! members. The exactly-one rule is carried by
//! [`InverseFunctionalIdentifier`] being an enum, so inconsistent identifier
//! combinations cannot be constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;
use crate::iri::{Iri, Irl};

// ============================================================================
// Account
// ============================================================================

/// A user account on an existing system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    name: String,
    #[serde(rename = "homePage")]
    home_page: Irl,
}

impl Account {
    pub fn new(name: impl Into<String>, home_page: Irl) -> Self {
        Self {
            name: name.into(),
            home_page,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home_page(&self) -> &Irl {
        &self.home_page
    }
}

// ============================================================================
// InverseFunctionalIdentifier
// ============================================================================

/// The one identifying attribute of an actor
///
/// Exactly one of the four identifier kinds is present per actor. Equality is
/// variant-wise: identifiers of different kinds are unequal, identifiers of
/// the same kind compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InverseFunctionalIdentifier {
    /// A mailto IRI
    Mbox(Iri),
    /// The SHA1 hash of a mailto IRI
    MboxSha1Sum(String),
    /// An openID URI
    OpenId(String),
    /// An account on an existing system
    Account(Account),
}

impl InverseFunctionalIdentifier {
    pub fn with_mbox(mbox: Iri) -> Self {
        Self::Mbox(mbox)
    }

    pub fn with_mbox_sha1_sum(hash: impl Into<String>) -> Self {
        Self::MboxSha1Sum(hash.into())
    }

    pub fn with_open_id(open_id: impl Into<String>) -> Self {
        Self::OpenId(open_id.into())
    }

    pub fn with_account(account: Account) -> Self {
        Self::Account(account)
    }

    pub fn mbox(&self) -> Option<&Iri> {
        match self {
            Self::Mbox(mbox) => Some(mbox),
            _ => None,
        }
    }

    pub fn mbox_sha1_sum(&self) -> Option<&str> {
        match self {
            Self::MboxSha1Sum(hash) => Some(hash),
            _ => None,
        }
    }

    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::OpenId(open_id) => Some(open_id),
            _ => None,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Account(account) => Some(account),
            _ => None,
        }
    }
}

impl fmt::Display for InverseFunctionalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mbox(mbox) => write!(f, "{}", mbox),
            Self::MboxSha1Sum(hash) => write!(f, "{}", hash),
            Self::OpenId(open_id) => write!(f, "{}", open_id),
            Self::Account(account) => {
                write!(f, "{} ({})", account.name(), account.home_page())
            }
        }
    }
}

// ============================================================================
// Wire shape
// ============================================================================

// On the wire an actor is one flat object: the identifier kinds appear as
// sibling fields (at most one may be present), "objectType" discriminates
// agents from groups and defaults to "Agent" when absent, and "member" is
// only legal on groups. One conversion struct covers Agent, Group, and Actor
// so the construction invariants hold through deserialization as well.

#[derive(Clone, Copy, Serialize, Deserialize)]
enum ActorTag {
    Agent,
    Group,
}

#[derive(Serialize, Deserialize)]
struct ActorWire {
    #[serde(rename = "objectType", default, skip_serializing_if = "Option::is_none")]
    object_type: Option<ActorTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mbox: Option<Iri>,
    #[serde(
        default,
        rename = "mbox_sha1sum",
        skip_serializing_if = "Option::is_none"
    )]
    mbox_sha1_sum: Option<String>,
    #[serde(default, rename = "openid", skip_serializing_if = "Option::is_none")]
    open_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, rename = "member", skip_serializing_if = "Vec::is_empty")]
    members: Vec<Agent>,
}

fn ifi_from_wire(
    mbox: Option<Iri>,
    mbox_sha1_sum: Option<String>,
    open_id: Option<String>,
    account: Option<Account>,
) -> Result<Option<InverseFunctionalIdentifier>, ModelError> {
    let mut identifiers: Vec<InverseFunctionalIdentifier> = Vec::new();
    if let Some(mbox) = mbox {
        identifiers.push(InverseFunctionalIdentifier::Mbox(mbox));
    }
    if let Some(hash) = mbox_sha1_sum {
        identifiers.push(InverseFunctionalIdentifier::MboxSha1Sum(hash));
    }
    if let Some(open_id) = open_id {
        identifiers.push(InverseFunctionalIdentifier::OpenId(open_id));
    }
    if let Some(account) = account {
        identifiers.push(InverseFunctionalIdentifier::Account(account));
    }
    if identifiers.len() > 1 {
        return Err(ModelError::validation(
            "an actor must not carry more than one inverse functional identifier",
        ));
    }
    Ok(identifiers.pop())
}

fn ifi_to_wire(
    ifi: Option<InverseFunctionalIdentifier>,
) -> (
    Option<Iri>,
    Option<String>,
    Option<String>,
    Option<Account>,
) {
    match ifi {
        Some(InverseFunctionalIdentifier::Mbox(mbox)) => (Some(mbox), None, None, None),
        Some(InverseFunctionalIdentifier::MboxSha1Sum(hash)) => (None, Some(hash), None, None),
        Some(InverseFunctionalIdentifier::OpenId(open_id)) => (None, None, Some(open_id), None),
        Some(InverseFunctionalIdentifier::Account(account)) => (None, None, None, Some(account)),
        None => (None, None, None, None),
    }
}

// ============================================================================
// Agent
// ============================================================================

/// An individual actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActorWire", into = "ActorWire")]
pub struct Agent {
    ifi: InverseFunctionalIdentifier,
    name: Option<String>,
}

impl Agent {
    pub fn new(ifi: InverseFunctionalIdentifier) -> Self {
        Self { ifi, name: None }
    }

    /// Returns a new agent with the display name set.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            ifi: self.ifi.clone(),
            name: Some(name.into()),
        }
    }

    pub fn ifi(&self) -> &InverseFunctionalIdentifier {
        &self.ifi
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl TryFrom<ActorWire> for Agent {
    type Error = ModelError;

    fn try_from(wire: ActorWire) -> Result<Self, Self::Error> {
        if matches!(wire.object_type, Some(ActorTag::Group)) {
            return Err(ModelError::validation("expected an agent, got a group"));
        }
        if !wire.members.is_empty() {
            return Err(ModelError::validation("only a group may declare members"));
        }
        let ifi = ifi_from_wire(wire.mbox, wire.mbox_sha1_sum, wire.open_id, wire.account)?
            .ok_or_else(|| {
                ModelError::validation("an agent requires an inverse functional identifier")
            })?;
        Ok(Self {
            ifi,
            name: wire.name,
        })
    }
}

impl From<Agent> for ActorWire {
    fn from(agent: Agent) -> Self {
        let (mbox, mbox_sha1_sum, open_id, account) = ifi_to_wire(Some(agent.ifi));
        Self {
            object_type: Some(ActorTag::Agent),
            mbox,
            mbox_sha1_sum,
            open_id,
            account,
            name: agent.name,
            members: Vec::new(),
        }
    }
}

// ============================================================================
// Group
// ============================================================================

/// A group of actors acting as one
///
/// A group with no inverse functional identifier is an anonymous group,
/// identified only by its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActorWire", into = "ActorWire")]
pub struct Group {
    ifi: Option<InverseFunctionalIdentifier>,
    name: Option<String>,
    members: Vec<Agent>,
}

impl Group {
    /// Create an anonymous group with no identifier, name, or members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new group with the identifier set.
    pub fn with_ifi(&self, ifi: InverseFunctionalIdentifier) -> Self {
        let mut group = self.clone();
        group.ifi = Some(ifi);
        group
    }

    /// Returns a new group with the display name set.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut group = self.clone();
        group.name = Some(name.into());
        group
    }

    /// Returns a new group with the agent appended to its members.
    pub fn with_member(&self, member: Agent) -> Self {
        let mut group = self.clone();
        group.members.push(member);
        group
    }

    pub fn ifi(&self) -> Option<&InverseFunctionalIdentifier> {
        self.ifi.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn members(&self) -> &[Agent] {
        &self.members
    }
}

impl TryFrom<ActorWire> for Group {
    type Error = ModelError;

    fn try_from(wire: ActorWire) -> Result<Self, Self::Error> {
        if matches!(wire.object_type, Some(ActorTag::Agent)) {
            return Err(ModelError::validation("expected a group, got an agent"));
        }
        let ifi = ifi_from_wire(wire.mbox, wire.mbox_sha1_sum, wire.open_id, wire.account)?;
        Ok(Self {
            ifi,
            name: wire.name,
            members: wire.members,
        })
    }
}

impl From<Group> for ActorWire {
    fn from(group: Group) -> Self {
        let (mbox, mbox_sha1_sum, open_id, account) = ifi_to_wire(group.ifi);
        Self {
            object_type: Some(ActorTag::Group),
            mbox,
            mbox_sha1_sum,
            open_id,
            account,
            name: group.name,
            members: group.members,
        }
    }
}

// ============================================================================
// Actor
// ============================================================================

/// The actor of a statement: an agent or a group
///
/// Mismatched variants are unequal; an agent never equals a group even when
/// their identifiers match. An actor without an "objectType" on the wire is
/// an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActorWire", into = "ActorWire")]
pub enum Actor {
    Agent(Agent),
    Group(Group),
}

impl Actor {
    pub fn ifi(&self) -> Option<&InverseFunctionalIdentifier> {
        match self {
            Self::Agent(agent) => Some(agent.ifi()),
            Self::Group(group) => group.ifi(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Agent(agent) => agent.name(),
            Self::Group(group) => group.name(),
        }
    }
}

impl TryFrom<ActorWire> for Actor {
    type Error = ModelError;

    fn try_from(wire: ActorWire) -> Result<Self, Self::Error> {
        match wire.object_type {
            Some(ActorTag::Group) => Group::try_from(wire).map(Self::Group),
            None | Some(ActorTag::Agent) => Agent::try_from(wire).map(Self::Agent),
        }
    }
}

impl From<Actor> for ActorWire {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Agent(agent) => agent.into(),
            Actor::Group(group) => group.into(),
        }
    }
}

impl From<Agent> for Actor {
    fn from(agent: Agent) -> Self {
        Self::Agent(agent)
    }
}

impl From<Group> for Actor {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}
