//! Language-tag keyed text map
//!
//! Maps RFC 5646 language tags (e.g. "en-US") to localized text. The map is
//! read-only once built; [`LanguageMap::with_entry`] is the sanctioned way to
//! derive an updated copy. Insertion order is observable through
//! [`LanguageMap::language_tags`], but equality ignores it.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ModelError;

/// A mapping from language tag to localized text
#[derive(Debug, Clone, Default, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl LanguageMap {
    /// Create an empty language map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a language map from tag/text pairs.
    ///
    /// A tag appearing more than once keeps its first position; the later
    /// text replaces the earlier one.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let mut map = Self::new();
        for (tag, text) in entries {
            map.insert(tag.into(), text.into());
        }
        map
    }

    /// Returns the text registered for a language tag.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MissingKey` if the tag is not present.
    pub fn get(&self, tag: &str) -> Result<&str, ModelError> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == tag)
            .map(|(_, text)| text.as_str())
            .ok_or_else(|| ModelError::missing_key("language map", tag))
    }

    /// Returns true if the tag is present.
    pub fn has(&self, tag: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == tag)
    }

    /// Returns a new map with the entry added or replaced.
    ///
    /// The receiver is left unchanged.
    pub fn with_entry(&self, tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut map = self.clone();
        map.insert(tag.into(), text.into());
        map
    }

    /// Returns the language tags in insertion order.
    pub fn language_tags(&self) -> Vec<&str> {
        self.entries.iter().map(|(tag, _)| tag.as_str()).collect()
    }

    /// Iterates tag/text pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(tag, text)| (tag.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, tag: String, text: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == tag) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((tag, text)),
        }
    }
}

// Tag sets are compared without regard to insertion order. Tags are unique
// within a map, so equal lengths plus self-contained-in-other is enough.
impl PartialEq for LanguageMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(tag, text)| other.get(tag).is_ok_and(|other_text| other_text == text))
    }
}

// The wire form is a JSON object, not a pair list.
impl Serialize for LanguageMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tag, text) in &self.entries {
            map.serialize_entry(tag, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LanguageMapVisitor;

        impl<'de> Visitor<'de> for LanguageMapVisitor {
            type Value = LanguageMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of language tags to text")
            }

            fn visit_map<M>(self, mut access: M) -> Result<LanguageMap, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut map = LanguageMap::new();
                while let Some((tag, text)) = access.next_entry::<String, String>()? {
                    map.insert(tag, text);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_registered_text() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        assert_eq!(map.get("en-US").unwrap(), "attended");
    }

    #[test]
    fn get_unknown_tag_fails() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        let result = map.get("en-GB");
        assert!(matches!(result, Err(ModelError::MissingKey { .. })));
    }

    #[test]
    fn has_probes_without_failing() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        assert!(map.has("en-US"));
        assert!(!map.has("en-GB"));
    }

    #[test]
    fn with_entry_leaves_receiver_unchanged() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        let extended = map.with_entry("en-GB", "attended");

        assert!(!map.has("en-GB"));
        assert_eq!(extended.get("en-GB").unwrap(), "attended");
        assert_eq!(extended.get("en-US").unwrap(), "attended");
    }

    #[test]
    fn with_entry_replaces_existing_text() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        let updated = map.with_entry("en-US", "joined");

        assert_eq!(map.get("en-US").unwrap(), "attended");
        assert_eq!(updated.get("en-US").unwrap(), "joined");
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn language_tags_keep_insertion_order() {
        let map = LanguageMap::from_entries([("en-US", "a"), ("de-DE", "b"), ("fr-FR", "c")]);
        assert_eq!(map.language_tags(), vec!["en-US", "de-DE", "fr-FR"]);
    }

    #[test]
    fn duplicate_tag_keeps_first_position() {
        let map = LanguageMap::from_entries([("en-US", "a"), ("de-DE", "b"), ("en-US", "c")]);
        assert_eq!(map.language_tags(), vec!["en-US", "de-DE"]);
        assert_eq!(map.get("en-US").unwrap(), "c");
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = LanguageMap::from_entries([("en-US", "attended"), ("de-DE", "teilgenommen")]);
        let b = LanguageMap::from_entries([("de-DE", "teilgenommen"), ("en-US", "attended")]);
        assert_eq!(a, b);
    }

    #[test]
    fn different_sizes_are_unequal() {
        let a = LanguageMap::from_entries([("en-US", "attended"), ("de-DE", "teilgenommen")]);
        let b = LanguageMap::from_entries([("en-US", "attended")]);
        assert_ne!(a, b);
    }

    #[test]
    fn different_texts_are_unequal() {
        let a = LanguageMap::from_entries([("en-US", "attended")]);
        let b = LanguageMap::from_entries([("en-US", "joined")]);
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_as_json_object() {
        let map = LanguageMap::from_entries([("en-US", "attended")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"en-US": "attended"}));
    }

    #[test]
    fn deserializes_from_json_object() {
        let map: LanguageMap =
            serde_json::from_value(serde_json::json!({"en-US": "attended"})).unwrap();
        assert_eq!(map.get("en-US").unwrap(), "attended");
    }
}
