//! Activity definitions and interaction definitions
//!
//! A [`Definition`] carries the descriptive metadata of an activity. When the
//! activity is an interaction (a question or exercise recorded with learner
//! responses), the definition additionally holds an
//! [`InteractionDefinition`]: the correct-responses pattern plus the
//! interaction kind with its kind-specific component lists. The kind is an
//! enum, so components of one kind can never be attached to another.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::extensions::Extensions;
use crate::iri::{Iri, Irl};
use crate::language_map::LanguageMap;

// ============================================================================
// InteractionComponent
// ============================================================================

/// One selectable component of an interaction (a choice, scale step, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionComponent {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<LanguageMap>,
}

impl InteractionComponent {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Returns a new component with the description set.
    pub fn with_description(&self, description: LanguageMap) -> Self {
        Self {
            id: self.id.clone(),
            description: Some(description),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }
}

// ============================================================================
// Interaction
// ============================================================================

/// The kind of an interaction together with its kind-specific components
///
/// Component lists are ordered; comparing them is count- then
/// element-in-order sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    TrueFalse,
    Choice {
        choices: Option<Vec<InteractionComponent>>,
    },
    FillIn,
    LongFillIn,
    Likert {
        scale: Option<Vec<InteractionComponent>>,
    },
    Matching {
        source: Option<Vec<InteractionComponent>>,
        target: Option<Vec<InteractionComponent>>,
    },
    Performance {
        steps: Option<Vec<InteractionComponent>>,
    },
    Sequencing {
        choices: Option<Vec<InteractionComponent>>,
    },
    Numeric,
    Other,
}

// ============================================================================
// InteractionDefinition
// ============================================================================

/// The interaction half of an activity definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionDefinition {
    correct_responses_pattern: Option<Vec<String>>,
    interaction: Interaction,
}

impl InteractionDefinition {
    pub fn new(interaction: Interaction) -> Self {
        Self {
            correct_responses_pattern: None,
            interaction,
        }
    }

    /// Returns a new definition with the correct-responses pattern set.
    ///
    /// Pattern entries are ordered; order matters for equality.
    pub fn with_correct_responses_pattern(
        &self,
        pattern: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            correct_responses_pattern: Some(pattern.into_iter().map(Into::into).collect()),
            interaction: self.interaction.clone(),
        }
    }

    pub fn correct_responses_pattern(&self) -> Option<&[String]> {
        self.correct_responses_pattern.as_deref()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}

// ============================================================================
// Definition
// ============================================================================

/// The descriptive metadata of an activity
///
/// All fields default to absent. A definition carrying an interaction is
/// never equal to one without, even when the descriptive fields match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionWire", into = "DefinitionWire")]
pub struct Definition {
    name: Option<LanguageMap>,
    description: Option<LanguageMap>,
    activity_type: Option<Iri>,
    more_info: Option<Irl>,
    extensions: Option<Extensions>,
    interaction: Option<InteractionDefinition>,
}

impl Definition {
    /// Create a definition with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new definition with the name map set.
    pub fn with_name(&self, name: LanguageMap) -> Self {
        let mut definition = self.clone();
        definition.name = Some(name);
        definition
    }

    /// Returns a new definition with the description map set.
    pub fn with_description(&self, description: LanguageMap) -> Self {
        let mut definition = self.clone();
        definition.description = Some(description);
        definition
    }

    /// Returns a new definition with the activity type IRI set.
    pub fn with_activity_type(&self, activity_type: Iri) -> Self {
        let mut definition = self.clone();
        definition.activity_type = Some(activity_type);
        definition
    }

    /// Returns a new definition with the documentation IRL set.
    pub fn with_more_info(&self, more_info: Irl) -> Self {
        let mut definition = self.clone();
        definition.more_info = Some(more_info);
        definition
    }

    /// Returns a new definition with the extensions set.
    pub fn with_extensions(&self, extensions: Extensions) -> Self {
        let mut definition = self.clone();
        definition.extensions = Some(extensions);
        definition
    }

    /// Returns a new definition with the interaction half set.
    pub fn with_interaction(&self, interaction: InteractionDefinition) -> Self {
        let mut definition = self.clone();
        definition.interaction = Some(interaction);
        definition
    }

    pub fn name(&self) -> Option<&LanguageMap> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    pub fn activity_type(&self) -> Option<&Iri> {
        self.activity_type.as_ref()
    }

    pub fn more_info(&self) -> Option<&Irl> {
        self.more_info.as_ref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    pub fn interaction(&self) -> Option<&InteractionDefinition> {
        self.interaction.as_ref()
    }
}

// ============================================================================
// Wire shape
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum InteractionKind {
    TrueFalse,
    Choice,
    FillIn,
    LongFillIn,
    Likert,
    Matching,
    Performance,
    Sequencing,
    Numeric,
    Other,
}

// On the wire the interaction fields sit flat beside the descriptive ones,
// discriminated by "interactionType". The conversion validates that the
// component lists present actually belong to the declared kind.
#[derive(Serialize, Deserialize)]
struct DefinitionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<LanguageMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<LanguageMap>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    activity_type: Option<Iri>,
    #[serde(default, rename = "moreInfo", skip_serializing_if = "Option::is_none")]
    more_info: Option<Irl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<Extensions>,
    #[serde(
        default,
        rename = "interactionType",
        skip_serializing_if = "Option::is_none"
    )]
    interaction_type: Option<InteractionKind>,
    #[serde(
        default,
        rename = "correctResponsesPattern",
        skip_serializing_if = "Option::is_none"
    )]
    correct_responses_pattern: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    choices: Option<Vec<InteractionComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scale: Option<Vec<InteractionComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Vec<InteractionComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<Vec<InteractionComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<InteractionComponent>>,
}

impl TryFrom<DefinitionWire> for Definition {
    type Error = ModelError;

    fn try_from(wire: DefinitionWire) -> Result<Self, Self::Error> {
        let DefinitionWire {
            name,
            description,
            activity_type,
            more_info,
            extensions,
            interaction_type,
            correct_responses_pattern,
            mut choices,
            mut scale,
            mut source,
            mut target,
            mut steps,
        } = wire;

        let interaction = match interaction_type {
            None => {
                if correct_responses_pattern.is_some()
                    || choices.is_some()
                    || scale.is_some()
                    || source.is_some()
                    || target.is_some()
                    || steps.is_some()
                {
                    return Err(ModelError::validation(
                        "interaction fields require an interactionType",
                    ));
                }
                None
            }
            Some(kind) => {
                // Each kind takes the lists that belong to it; anything left
                // over was declared for the wrong kind.
                let interaction = match kind {
                    InteractionKind::TrueFalse => Interaction::TrueFalse,
                    InteractionKind::Choice => Interaction::Choice {
                        choices: choices.take(),
                    },
                    InteractionKind::FillIn => Interaction::FillIn,
                    InteractionKind::LongFillIn => Interaction::LongFillIn,
                    InteractionKind::Likert => Interaction::Likert {
                        scale: scale.take(),
                    },
                    InteractionKind::Matching => Interaction::Matching {
                        source: source.take(),
                        target: target.take(),
                    },
                    InteractionKind::Performance => Interaction::Performance {
                        steps: steps.take(),
                    },
                    InteractionKind::Sequencing => Interaction::Sequencing {
                        choices: choices.take(),
                    },
                    InteractionKind::Numeric => Interaction::Numeric,
                    InteractionKind::Other => Interaction::Other,
                };
                if choices.is_some()
                    || scale.is_some()
                    || source.is_some()
                    || target.is_some()
                    || steps.is_some()
                {
                    return Err(ModelError::validation(
                        "interaction components do not match the interaction type",
                    ));
                }
                Some(InteractionDefinition {
                    correct_responses_pattern,
                    interaction,
                })
            }
        };

        Ok(Self {
            name,
            description,
            activity_type,
            more_info,
            extensions,
            interaction,
        })
    }
}

impl From<Definition> for DefinitionWire {
    fn from(definition: Definition) -> Self {
        let mut wire = Self {
            name: definition.name,
            description: definition.description,
            activity_type: definition.activity_type,
            more_info: definition.more_info,
            extensions: definition.extensions,
            interaction_type: None,
            correct_responses_pattern: None,
            choices: None,
            scale: None,
            source: None,
            target: None,
            steps: None,
        };
        if let Some(interaction) = definition.interaction {
            wire.correct_responses_pattern = interaction.correct_responses_pattern;
            wire.interaction_type = Some(match interaction.interaction {
                Interaction::TrueFalse => InteractionKind::TrueFalse,
                Interaction::Choice { choices } => {
                    wire.choices = choices;
                    InteractionKind::Choice
                }
                Interaction::FillIn => InteractionKind::FillIn,
                Interaction::LongFillIn => InteractionKind::LongFillIn,
                Interaction::Likert { scale } => {
                    wire.scale = scale;
                    InteractionKind::Likert
                }
                Interaction::Matching { source, target } => {
                    wire.source = source;
                    wire.target = target;
                    InteractionKind::Matching
                }
                Interaction::Performance { steps } => {
                    wire.steps = steps;
                    InteractionKind::Performance
                }
                Interaction::Sequencing { choices } => {
                    wire.choices = choices;
                    InteractionKind::Sequencing
                }
                Interaction::Numeric => InteractionKind::Numeric,
                Interaction::Other => InteractionKind::Other,
            });
        }
        wire
    }
}
