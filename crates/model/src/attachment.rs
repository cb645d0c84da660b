//! Statement attachments
//!
//! An attachment is a digital artifact recorded with a statement: its usage
//! type, content type, octet length, SHA-2 hash, human-readable display and
//! description, and either a file URL or the raw content itself. At least
//! one of the two must be present.
//!
//! Raw content travels out of band (as a separate MIME part, not in the
//! statement JSON), so it is never serialized; an attachment arriving over
//! the wire must therefore carry a file URL.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::iri::{Iri, Irl};
use crate::language_map::LanguageMap;

/// A digital artifact attached to a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttachmentWire", into = "AttachmentWire")]
pub struct Attachment {
    usage_type: Iri,
    content_type: String,
    length: u64,
    sha2: String,
    display: LanguageMap,
    description: Option<LanguageMap>,
    file_url: Option<Irl>,
    content: Option<String>,
}

impl Attachment {
    /// Create an attachment.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` if neither a file URL nor raw
    /// content is given.
    pub fn new(
        usage_type: Iri,
        content_type: impl Into<String>,
        length: u64,
        sha2: impl Into<String>,
        display: LanguageMap,
        description: Option<LanguageMap>,
        file_url: Option<Irl>,
        content: Option<String>,
    ) -> Result<Self, ModelError> {
        if file_url.is_none() && content.is_none() {
            return Err(ModelError::validation(
                "an attachment requires a file URL or raw content data",
            ));
        }
        Ok(Self {
            usage_type,
            content_type: content_type.into(),
            length,
            sha2: sha2.into(),
            display,
            description,
            file_url,
            content,
        })
    }

    pub fn usage_type(&self) -> &Iri {
        &self.usage_type
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The length of the attachment data in octets.
    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn sha2(&self) -> &str {
        &self.sha2
    }

    pub fn display(&self) -> &LanguageMap {
        &self.display
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    pub fn file_url(&self) -> Option<&Irl> {
        self.file_url.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[derive(Serialize, Deserialize)]
struct AttachmentWire {
    #[serde(rename = "usageType")]
    usage_type: Iri,
    #[serde(rename = "contentType")]
    content_type: String,
    length: u64,
    sha2: String,
    display: LanguageMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<LanguageMap>,
    #[serde(default, rename = "fileUrl", skip_serializing_if = "Option::is_none")]
    file_url: Option<Irl>,
}

impl TryFrom<AttachmentWire> for Attachment {
    type Error = ModelError;

    fn try_from(wire: AttachmentWire) -> Result<Self, Self::Error> {
        Self::new(
            wire.usage_type,
            wire.content_type,
            wire.length,
            wire.sha2,
            wire.display,
            wire.description,
            wire.file_url,
            None,
        )
    }
}

impl From<Attachment> for AttachmentWire {
    fn from(attachment: Attachment) -> Self {
        Self {
            usage_type: attachment.usage_type,
            content_type: attachment.content_type,
            length: attachment.length,
            sha2: attachment.sha2,
            display: attachment.display,
            description: attachment.description,
            file_url: attachment.file_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_type() -> Iri {
        Iri::new("http://id.tincanapi.com/attachment/supporting_media").unwrap()
    }

    fn file_url() -> Irl {
        Irl::new("http://tincanapi.com/conformancetest/attachment/fileUrlOnly").unwrap()
    }

    fn text_attachment() -> Attachment {
        Attachment::new(
            usage_type(),
            "text/plain",
            18,
            "bd1a58265d96a3d1981710dab8b1e1ed04a8d7557ea53ab0cf7b44c04fd01545",
            LanguageMap::from_entries([("en-US", "Text attachment")]),
            Some(LanguageMap::from_entries([(
                "en-US",
                "Text attachment description",
            )])),
            Some(file_url()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn file_url_only_is_valid() {
        let attachment = text_attachment();
        assert!(attachment.file_url().is_some());
        assert!(attachment.content().is_none());
        assert_eq!(attachment.length(), 18);
        assert_eq!(attachment.content_type(), "text/plain");
    }

    #[test]
    fn raw_content_only_is_valid() {
        let attachment = Attachment::new(
            usage_type(),
            "text/plain",
            18,
            "bd1a58265d96a3d1981710dab8b1e1ed04a8d7557ea53ab0cf7b44c04fd01545",
            LanguageMap::from_entries([("en-US", "Text attachment")]),
            None,
            None,
            Some("some text content".to_string()),
        )
        .unwrap();
        assert_eq!(attachment.content(), Some("some text content"));
    }

    #[test]
    fn neither_file_url_nor_content_fails() {
        let result = Attachment::new(
            usage_type(),
            "text/plain",
            18,
            "bd1a58265d96a3d1981710dab8b1e1ed04a8d7557ea53ab0cf7b44c04fd01545",
            LanguageMap::from_entries([("en-US", "Text attachment")]),
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[test]
    fn equal_field_wise() {
        assert_eq!(text_attachment(), text_attachment());
    }

    #[test]
    fn different_content_types_are_unequal() {
        let json_attachment = Attachment::new(
            usage_type(),
            "application/json",
            60,
            "f4135c31e2710764604195dfe4e225884d8108467cc21670803e384b80df88ee",
            LanguageMap::from_entries([("en-US", "JSON attachment")]),
            None,
            Some(file_url()),
            None,
        )
        .unwrap();
        assert_ne!(text_attachment(), json_attachment);
    }

    #[test]
    fn serializes_with_wire_names_and_without_content() {
        let json = serde_json::to_value(text_attachment()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "usageType": "http://id.tincanapi.com/attachment/supporting_media",
                "contentType": "text/plain",
                "length": 18,
                "sha2": "bd1a58265d96a3d1981710dab8b1e1ed04a8d7557ea53ab0cf7b44c04fd01545",
                "display": {"en-US": "Text attachment"},
                "description": {"en-US": "Text attachment description"},
                "fileUrl": "http://tincanapi.com/conformancetest/attachment/fileUrlOnly"
            })
        );
    }

    #[test]
    fn deserializing_without_file_url_fails() {
        let result: Result<Attachment, _> = serde_json::from_value(serde_json::json!({
            "usageType": "http://id.tincanapi.com/attachment/supporting_media",
            "contentType": "text/plain",
            "length": 18,
            "sha2": "bd1a58265d96a3d1981710dab8b1e1ed04a8d7557ea53ab0cf7b44c04fd01545",
            "display": {"en-US": "Text attachment"}
        }));
        assert!(result.is_err());
    }
}
