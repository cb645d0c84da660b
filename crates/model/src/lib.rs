//! xAPI data model - immutable value objects for the Experience API
//!
//! This crate contains the entity graph of xAPI statements: actors, verbs,
//! activities, results, contexts, attachments, documents, and the statement
//! aggregate itself, together with the query filter for the statements
//! resource.
//!
//! # Design Principles
//!
//! 1. **Immutable value objects** - every entity is frozen at construction;
//!    `with_*` methods return a new instance and never touch the receiver
//! 2. **Validated construction** - invariants hold from the moment a value
//!    exists, and deserialization runs the same checks
//! 3. **Structural equality** - deep, presence-symmetric comparison; a
//!    statement's protocol version never takes part
//! 4. **No I/O** - pure data types; HTTP clients and storage layers live in
//!    other crates and read entities through accessors

pub mod activity;
pub mod actor;
pub mod attachment;
pub mod context;
pub mod definition;
pub mod document;
pub mod error;
pub mod extensions;
pub mod filter;
pub mod ids;
pub mod iri;
pub mod language_map;
pub mod person;
pub mod result;
pub mod statement;
pub mod statement_object;
pub mod statement_result;
pub mod sub_statement;
pub mod verb;

// =============================================================================
// Identifiers and keyed containers
// =============================================================================

pub use error::ModelError;
pub use extensions::Extensions;
pub use ids::StatementId;
pub use iri::{Iri, Irl};
pub use language_map::LanguageMap;

// =============================================================================
// Actors
// =============================================================================

pub use actor::{Account, Actor, Agent, Group, InverseFunctionalIdentifier};
pub use person::Person;

// =============================================================================
// Activities and verbs
// =============================================================================

pub use activity::Activity;
pub use definition::{Definition, Interaction, InteractionComponent, InteractionDefinition};
pub use verb::Verb;

// =============================================================================
// The statement graph
// =============================================================================

pub use attachment::Attachment;
pub use context::{Context, ContextActivities};
pub use result::{ActivityResult, Score};
pub use statement::{Statement, StatementReference};
pub use statement_object::StatementObject;
pub use statement_result::StatementResult;
pub use sub_statement::SubStatement;

// =============================================================================
// Documents and queries
// =============================================================================

pub use document::{
    ActivityProfile, ActivityProfileDocument, AgentProfile, AgentProfileDocument, DocumentData,
    State, StateDocument,
};
pub use filter::{FilterValue, StatementsFilter};
