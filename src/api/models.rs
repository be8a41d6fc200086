// SPDX-License-Identifier: MPL-2.0
//! Wire types for the translation server's JSON API.

use crate::domain::language::{Language, LanguageCatalog};
use crate::error::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `GET /api/languages`
#[derive(Debug, Deserialize)]
pub struct LanguagesResponse {
    #[serde(deserialize_with = "ordered_languages")]
    pub source_languages: Vec<Language>,
    #[serde(deserialize_with = "ordered_languages")]
    pub target_languages: Vec<Language>,
}

impl From<LanguagesResponse> for LanguageCatalog {
    fn from(response: LanguagesResponse) -> Self {
        LanguageCatalog {
            source: response.source_languages,
            target: response.target_languages,
        }
    }
}

/// Reads a `{code: name}` object keeping the order of the document.
fn ordered_languages<'de, D>(deserializer: D) -> std::result::Result<Vec<Language>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedVisitor;

    impl<'de> Visitor<'de> for OrderedVisitor {
        type Value = Vec<Language>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping language codes to display names")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut languages = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((code, name)) = map.next_entry::<String, String>()? {
                languages.push(Language::new(code, name));
            }
            Ok(languages)
        }
    }

    deserializer.deserialize_map(OrderedVisitor)
}

/// `POST /api/translate/text` body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// `POST /api/translate/text` response, success or failure.
#[derive(Debug, Deserialize)]
pub struct TextResponse {
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TextResponse {
    pub fn into_result(self) -> Result<String> {
        check_error(self.error)?;
        self.translated_text
            .ok_or_else(|| Error::Parse("response has no translated_text".to_string()))
    }
}

/// `POST /api/translate/file` response, success or failure.
#[derive(Debug, Deserialize)]
pub struct FileResponse {
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FileResponse {
    pub fn into_result(self) -> Result<String> {
        check_error(self.error)?;
        self.download_url
            .ok_or_else(|| Error::Parse("response has no download_url".to_string()))
    }
}

/// Body of any failed call that still carries JSON.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/ollama-status`: health of the server's translation engine.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BackendStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub model_ready: bool,
    #[serde(default)]
    pub model: Option<String>,
}

impl BackendStatus {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.running && self.model_ready
    }
}

/// An empty `error` string does not count as a failure.
fn check_error(error: Option<String>) -> Result<()> {
    match error {
        Some(message) if !message.is_empty() => Err(Error::Api(message)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_document_order() {
        let json = r#"{
            "source_languages": {"auto": "Detect", "en": "English", "de": "German"},
            "target_languages": {"zh-TW": "Chinese (Traditional)", "en": "English"}
        }"#;
        let response: LanguagesResponse = serde_json::from_str(json).unwrap();
        let catalog = LanguageCatalog::from(response);

        let source: Vec<&str> = catalog.source.iter().map(|l| l.code.as_str()).collect();
        let target: Vec<&str> = catalog.target.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(source, ["auto", "en", "de"]);
        assert_eq!(target, ["zh-TW", "en"]);
        assert_eq!(catalog.source[0].name, "Detect");
    }

    #[test]
    fn catalog_ignores_extra_fields() {
        let json = r#"{
            "languages": {"auto": "Auto"},
            "source_languages": {},
            "target_languages": {}
        }"#;
        let response: LanguagesResponse = serde_json::from_str(json).unwrap();
        assert!(LanguageCatalog::from(response).is_empty());
    }

    #[test]
    fn text_request_serializes_field_names() {
        let request = TextRequest {
            text: "hello".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "fr".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "hello", "source_lang": "auto", "target_lang": "fr"})
        );
    }

    #[test]
    fn text_response_with_error_is_api_error() {
        let response: TextResponse = serde_json::from_str(r#"{"error": "X"}"#).unwrap();
        assert_eq!(response.into_result(), Err(Error::Api("X".to_string())));
    }

    #[test]
    fn text_response_with_empty_error_is_success() {
        let response: TextResponse =
            serde_json::from_str(r#"{"error": "", "translated_text": "bonjour"}"#).unwrap();
        assert_eq!(response.into_result(), Ok("bonjour".to_string()));
    }

    #[test]
    fn file_response_without_url_is_parse_error() {
        let response: FileResponse = serde_json::from_str(r#"{"mode": "pdf"}"#).unwrap();
        assert!(matches!(response.into_result(), Err(Error::Parse(_))));
    }

    #[test]
    fn backend_status_defaults_to_not_ready() {
        let status: BackendStatus = serde_json::from_str(r#"{"running": true}"#).unwrap();
        assert!(!status.is_ready());
        let status: BackendStatus =
            serde_json::from_str(r#"{"running": true, "model_ready": true, "model": "qwen2.5:7b"}"#)
                .unwrap();
        assert!(status.is_ready());
    }
}
