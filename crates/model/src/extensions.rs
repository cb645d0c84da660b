//! IRI-keyed extension data
//!
//! Extensions attach open-ended data to verbs, activities, contexts, and
//! results. Keys are IRIs by construction; values are arbitrary JSON shapes.
//! Like [`LanguageMap`](crate::LanguageMap), the container is read-only once
//! built, with [`Extensions::with_entry`] as the sanctioned update path.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ModelError;
use crate::iri::Iri;

/// A mapping from extension IRI to a JSON-shaped value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions {
    entries: HashMap<Iri, serde_json::Value>,
}

impl Extensions {
    /// Create an empty extensions map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an extensions map from IRI/value pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (Iri, serde_json::Value)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the value registered for an extension IRI.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if the IRI is not present.
    pub fn get(&self, key: &Iri) -> Result<&serde_json::Value, ModelError> {
        self.entries
            .get(key)
            .ok_or_else(|| ModelError::missing_key("extensions", key.as_str()))
    }

    /// Returns true if the IRI is present.
    pub fn has(&self, key: &Iri) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a new map with the entry added or replaced.
    ///
    /// The receiver is left unchanged.
    pub fn with_entry(&self, key: Iri, value: serde_json::Value) -> Self {
        let mut extensions = self.clone();
        extensions.entries.insert(key, value);
        extensions
    }

    /// Iterates the registered extension IRIs.
    pub fn keys(&self) -> impl Iterator<Item = &Iri> {
        self.entries.keys()
    }

    /// Iterates IRI/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Iri, &serde_json::Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn iri(value: &str) -> Iri {
        Iri::new(value).unwrap()
    }

    #[test]
    fn get_returns_registered_value() {
        let extensions = Extensions::from_entries([(
            iri("http://id.tincanapi.com/extension/topic"),
            json!("Interoperability"),
        )]);

        assert_eq!(
            extensions
                .get(&iri("http://id.tincanapi.com/extension/topic"))
                .unwrap(),
            &json!("Interoperability")
        );
    }

    #[test]
    fn get_unknown_key_fails() {
        let extensions = Extensions::new();
        let result = extensions.get(&iri("http://id.tincanapi.com/extension/topic"));
        assert!(matches!(result, Err(ModelError::MissingKey { .. })));
    }

    #[test]
    fn has_probes_without_failing() {
        let extensions = Extensions::from_entries([(
            iri("http://id.tincanapi.com/extension/topic"),
            json!("Interoperability"),
        )]);

        assert!(extensions.has(&iri("http://id.tincanapi.com/extension/topic")));
        assert!(!extensions.has(&iri("http://id.tincanapi.com/extension/other")));
    }

    #[test]
    fn with_entry_leaves_receiver_unchanged() {
        let extensions = Extensions::new();
        let extended = extensions.with_entry(
            iri("http://id.tincanapi.com/extension/color"),
            json!({"model": "RGB", "value": "#FFFFFF"}),
        );

        assert!(extensions.is_empty());
        assert_eq!(extended.len(), 1);
        assert_eq!(
            extended
                .get(&iri("http://id.tincanapi.com/extension/color"))
                .unwrap(),
            &json!({"model": "RGB", "value": "#FFFFFF"})
        );
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Extensions::from_entries([
            (iri("http://id.tincanapi.com/extension/topic"), json!("Interoperability")),
            (iri("http://id.tincanapi.com/extension/rank"), json!(1)),
        ]);
        let b = Extensions::from_entries([
            (iri("http://id.tincanapi.com/extension/rank"), json!(1)),
            (iri("http://id.tincanapi.com/extension/topic"), json!("Interoperability")),
        ]);

        assert_eq!(a, b);
    }

    #[test]
    fn compound_values_compare_structurally() {
        let color = iri("http://id.tincanapi.com/extension/color");
        let a = Extensions::from_entries([(
            color.clone(),
            json!({"model": "RGB", "value": "#FFFFFF"}),
        )]);
        let b = Extensions::from_entries([(
            color.clone(),
            json!({"value": "#FFFFFF", "model": "RGB"}),
        )]);
        let c = Extensions::from_entries([(color, json!({"model": "RGB", "value": "#000000"}))]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn different_sizes_are_unequal() {
        let a = Extensions::from_entries([(
            iri("http://id.tincanapi.com/extension/topic"),
            json!("Interoperability"),
        )]);
        let b = a.with_entry(iri("http://id.tincanapi.com/extension/rank"), json!(1));
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_as_json_object_keyed_by_iri() {
        let extensions = Extensions::from_entries([(
            iri("http://id.tincanapi.com/extension/topic"),
            json!("Interoperability"),
        )]);
        let json = serde_json::to_value(&extensions).unwrap();
        assert_eq!(
            json,
            json!({"http://id.tincanapi.com/extension/topic": "Interoperability"})
        );
    }

    #[test]
    fn deserializing_malformed_key_fails() {
        let result: Result<Extensions, _> =
            serde_json::from_value(json!({"not an iri": "value"}));
        assert!(result.is_err());
    }
}
