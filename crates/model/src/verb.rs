//! Statement verbs

use serde::{Deserialize, Serialize};

use crate::iri::Iri;
use crate::language_map::LanguageMap;

const VOIDED_VERB_IRI: &str = "http://adlnet.gov/expapi/verbs/voided";

/// The action of a statement
///
/// Verbs are equivalent when their ids match; the display map is descriptive
/// only and never participates in equality.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Verb {
    id: Iri,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<LanguageMap>,
}

impl Verb {
    pub fn new(id: Iri) -> Self {
        Self { id, display: None }
    }

    /// The canonical verb that marks a statement as voided.
    pub fn voided() -> Self {
        Self {
            id: Iri::new(VOIDED_VERB_IRI).expect("the voided verb IRI is well-formed"),
            display: None,
        }
    }

    /// Returns a new verb with the display map set.
    pub fn with_display(&self, display: LanguageMap) -> Self {
        Self {
            id: self.id.clone(),
            display: Some(display),
        }
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn display(&self) -> Option<&LanguageMap> {
        self.display.as_ref()
    }

    /// Returns true if this is the canonical voiding verb.
    pub fn is_void_verb(&self) -> bool {
        self.id.as_str() == VOIDED_VERB_IRI
    }
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
