//! Activities

use serde::{Deserialize, Serialize};

use crate::definition::Definition;
use crate::iri::Iri;

/// The thing a statement is about, identified by IRI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    id: Iri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<Definition>,
}

impl Activity {
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            definition: None,
        }
    }

    /// Returns a new activity with the definition set.
    pub fn with_definition(&self, definition: Definition) -> Self {
        Self {
            id: self.id.clone(),
            definition: Some(definition),
        }
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language_map::LanguageMap;

    fn test_activity() -> Activity {
        Activity::new(Iri::new("http://tincanapi.com/conformancetest/activityid").unwrap())
    }

    fn test_definition() -> Definition {
        Definition::new().with_name(LanguageMap::from_entries([("en-US", "test activity")]))
    }

    #[test]
    fn exposes_id() {
        assert_eq!(
            test_activity().id().as_str(),
            "http://tincanapi.com/conformancetest/activityid"
        );
    }

    #[test]
    fn with_definition_leaves_receiver_unchanged() {
        let activity = test_activity();
        let defined = activity.with_definition(test_definition());
        assert!(activity.definition().is_none());
        assert!(defined.definition().is_some());
    }

    #[test]
    fn equal_with_same_id() {
        assert_eq!(test_activity(), test_activity());
    }

    #[test]
    fn different_ids_are_unequal() {
        let other = Activity::new(Iri::new("http://tincanapi.com/conformancetest/other").unwrap());
        assert_ne!(test_activity(), other);
    }

    #[test]
    fn definition_presence_mismatch_is_unequal() {
        let bare = test_activity();
        let defined = bare.with_definition(test_definition());
        assert_ne!(bare, defined);
    }

    #[test]
    fn equal_with_same_definition() {
        let a = test_activity().with_definition(test_definition());
        let b = test_activity().with_definition(test_definition());
        assert_eq!(a, b);
    }
}
