//! Statement context
//!
//! Context situates a statement: who instructed, which team, under which
//! registration, inside which platform and language, related to which other
//! activities and statements. Every field defaults to absent and each is
//! independently replaceable through a wither.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::{Agent, Group};
use crate::activity::Activity;
use crate::extensions::Extensions;
use crate::statement::StatementReference;

// ============================================================================
// ContextActivities
// ============================================================================

/// Activities related to the statement's activity, grouped by relation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextActivities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Vec<Activity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grouping: Option<Vec<Activity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Vec<Activity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    other: Option<Vec<Activity>>,
}

impl ContextActivities {
    /// Create a context-activities set with every relation absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with the activity appended to the parent relation.
    pub fn with_added_parent_activity(&self, activity: Activity) -> Self {
        let mut activities = self.clone();
        activities.parent.get_or_insert_with(Vec::new).push(activity);
        activities
    }

    /// Returns a new set with the activity appended to the grouping relation.
    pub fn with_added_grouping_activity(&self, activity: Activity) -> Self {
        let mut activities = self.clone();
        activities
            .grouping
            .get_or_insert_with(Vec::new)
            .push(activity);
        activities
    }

    /// Returns a new set with the activity appended to the category relation.
    pub fn with_added_category_activity(&self, activity: Activity) -> Self {
        let mut activities = self.clone();
        activities
            .category
            .get_or_insert_with(Vec::new)
            .push(activity);
        activities
    }

    /// Returns a new set with the activity appended to the other relation.
    pub fn with_added_other_activity(&self, activity: Activity) -> Self {
        let mut activities = self.clone();
        activities.other.get_or_insert_with(Vec::new).push(activity);
        activities
    }

    pub fn parent_activities(&self) -> Option<&[Activity]> {
        self.parent.as_deref()
    }

    pub fn grouping_activities(&self) -> Option<&[Activity]> {
        self.grouping.as_deref()
    }

    pub fn category_activities(&self) -> Option<&[Activity]> {
        self.category.as_deref()
    }

    pub fn other_activities(&self) -> Option<&[Activity]> {
        self.other.as_deref()
    }
}

// ============================================================================
// Context
// ============================================================================

/// The circumstances under which a statement was recorded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    registration: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructor: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    team: Option<Group>,
    #[serde(
        default,
        rename = "contextActivities",
        skip_serializing_if = "Option::is_none"
    )]
    context_activities: Option<ContextActivities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    statement: Option<StatementReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<Extensions>,
}

impl Context {
    /// Create a context with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context with the registration set.
    pub fn with_registration(&self, registration: Uuid) -> Self {
        let mut context = self.clone();
        context.registration = Some(registration);
        context
    }

    /// Returns a new context with the instructor set.
    pub fn with_instructor(&self, instructor: Agent) -> Self {
        let mut context = self.clone();
        context.instructor = Some(instructor);
        context
    }

    /// Returns a new context with the team set.
    pub fn with_team(&self, team: Group) -> Self {
        let mut context = self.clone();
        context.team = Some(team);
        context
    }

    /// Returns a new context with the context activities set.
    pub fn with_context_activities(&self, context_activities: ContextActivities) -> Self {
        let mut context = self.clone();
        context.context_activities = Some(context_activities);
        context
    }

    /// Returns a new context with the revision set.
    pub fn with_revision(&self, revision: impl Into<String>) -> Self {
        let mut context = self.clone();
        context.revision = Some(revision.into());
        context
    }

    /// Returns a new context with the platform set.
    pub fn with_platform(&self, platform: impl Into<String>) -> Self {
        let mut context = self.clone();
        context.platform = Some(platform.into());
        context
    }

    /// Returns a new context with the language tag set.
    pub fn with_language(&self, language: impl Into<String>) -> Self {
        let mut context = self.clone();
        context.language = Some(language.into());
        context
    }

    /// Returns a new context referencing another statement.
    pub fn with_statement(&self, statement: StatementReference) -> Self {
        let mut context = self.clone();
        context.statement = Some(statement);
        context
    }

    /// Returns a new context with the extensions set.
    pub fn with_extensions(&self, extensions: Extensions) -> Self {
        let mut context = self.clone();
        context.extensions = Some(extensions);
        context
    }

    pub fn registration(&self) -> Option<&Uuid> {
        self.registration.as_ref()
    }

    pub fn instructor(&self) -> Option<&Agent> {
        self.instructor.as_ref()
    }

    pub fn team(&self) -> Option<&Group> {
        self.team.as_ref()
    }

    pub fn context_activities(&self) -> Option<&ContextActivities> {
        self.context_activities.as_ref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn statement(&self) -> Option<&StatementReference> {
        self.statement.as_ref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }
}
