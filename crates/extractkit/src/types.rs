//! Core types for ExtractKit

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of structured output requested from the generation model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionType {
    /// Comprehensive summary with key insights
    #[default]
    Summary,
    /// Bulleted list of important points
    KeyPoints,
    /// Organized format with sections
    Structured,
    /// Extract people, organizations, dates, etc.
    Entities,
}

impl ExtractionType {
    /// All recognized extraction types, in listing order
    pub const ALL: [ExtractionType; 4] = [
        ExtractionType::Summary,
        ExtractionType::KeyPoints,
        ExtractionType::Structured,
        ExtractionType::Entities,
    ];

    /// Wire identifier for this type
    pub fn id(&self) -> &'static str {
        match self {
            ExtractionType::Summary => "summary",
            ExtractionType::KeyPoints => "key_points",
            ExtractionType::Structured => "structured",
            ExtractionType::Entities => "entities",
        }
    }

    /// Human-readable display name
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionType::Summary => "Summary",
            ExtractionType::KeyPoints => "Key Points",
            ExtractionType::Structured => "Structured",
            ExtractionType::Entities => "Entities",
        }
    }

    /// One-line description for the static listing surface
    pub fn description(&self) -> &'static str {
        match self {
            ExtractionType::Summary => "Comprehensive summary with key insights",
            ExtractionType::KeyPoints => "Bulleted list of important points",
            ExtractionType::Structured => "Organized format with sections",
            ExtractionType::Entities => "Extract people, organizations, dates, etc.",
        }
    }
}

impl FromStr for ExtractionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(ExtractionType::Summary),
            "key_points" => Ok(ExtractionType::KeyPoints),
            "structured" => Ok(ExtractionType::Structured),
            "entities" => Ok(ExtractionType::Entities),
            _ => Err(format!(
                "Invalid extraction type. Must be one of: summary, key_points, structured, entities (got \"{}\")",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExtractionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

fn default_extraction_type() -> String {
    "summary".to_string()
}

/// Request to extract an article from a URL
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionRequest {
    /// The URL to fetch (required, must be http:// or https://)
    pub url: String,

    /// Extraction type id (optional, defaults to "summary")
    ///
    /// An absent field defaults; a present but unrecognized value is
    /// rejected before any network call.
    #[serde(default = "default_extraction_type")]
    pub extraction_type: String,
}

impl ExtractionRequest {
    /// Create a new request with the default extraction type
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extraction_type: default_extraction_type(),
        }
    }

    /// Set the extraction type
    pub fn extraction_type(mut self, extraction_type: ExtractionType) -> Self {
        self.extraction_type = extraction_type.id().to_string();
        self
    }
}

/// Readable page content after fetch, selection, and normalization
///
/// Intermediate pipeline value; never serialized.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Extracted title, or "Article" when none was found
    pub title: String,
    /// Normalized (and possibly truncated) article text
    pub content: String,
    /// Character count of `content`
    pub length: usize,
    /// The fetched URL
    pub url: String,
}

/// Final result of an extraction, success or failure
///
/// Constructed only through [`ExtractionResult::success`] and
/// [`ExtractionResult::failure`], so it is never partially populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionResult {
    /// Whether the extraction succeeded
    pub success: bool,

    /// The requested URL
    pub url: String,

    /// Article title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Extraction type id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_type: Option<String>,

    /// Character count of the normalized content sent to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,

    /// Generated text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    /// Error message (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a fully populated success result
    pub fn success(
        url: impl Into<String>,
        title: impl Into<String>,
        extraction_type: ExtractionType,
        content_length: usize,
        extracted_text: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            url: url.into(),
            title: Some(title.into()),
            extraction_type: Some(extraction_type.id().to_string()),
            content_length: Some(content_length),
            extracted_text: Some(extracted_text.into()),
            error: None,
        }
    }

    /// Build a failure result carrying a boundary-facing message
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: url.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Read-only report of the generation client configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusReport {
    /// True when a generation client is configured
    pub api_configured: bool,
    /// Active model identifier
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_type_from_str() {
        assert_eq!(
            ExtractionType::from_str("summary").unwrap(),
            ExtractionType::Summary
        );
        assert_eq!(
            ExtractionType::from_str("key_points").unwrap(),
            ExtractionType::KeyPoints
        );
        assert_eq!(
            ExtractionType::from_str("structured").unwrap(),
            ExtractionType::Structured
        );
        assert_eq!(
            ExtractionType::from_str("entities").unwrap(),
            ExtractionType::Entities
        );
    }

    #[test]
    fn test_extraction_type_from_str_rejects_unknown() {
        let err = ExtractionType::from_str("bogus").unwrap_err();
        assert!(err.contains("summary"));
        assert!(err.contains("key_points"));
        assert!(err.contains("structured"));
        assert!(err.contains("entities"));
        // Case-sensitive on purpose: the wire ids are lowercase
        assert!(ExtractionType::from_str("Summary").is_err());
    }

    #[test]
    fn test_extraction_type_roundtrip_ids() {
        for ty in ExtractionType::ALL {
            assert_eq!(ExtractionType::from_str(ty.id()).unwrap(), ty);
            assert_eq!(ty.to_string(), ty.id());
        }
    }

    #[test]
    fn test_request_defaults_to_summary() {
        let req: ExtractionRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(req.extraction_type, "summary");
    }

    #[test]
    fn test_request_builder() {
        let req = ExtractionRequest::new("https://example.com")
            .extraction_type(ExtractionType::Entities);
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.extraction_type, "entities");
    }

    #[test]
    fn test_success_result_serialization() {
        let result = ExtractionResult::success(
            "https://example.com",
            "Title",
            ExtractionType::Summary,
            42,
            "Generated",
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"extraction_type\":\"summary\""));
        assert!(json.contains("\"content_length\":42"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_failure_result_omits_success_fields() {
        let result = ExtractionResult::failure("https://example.com", "Network error: refused");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"Network error: refused\""));
        assert!(!json.contains("extracted_text"));
        assert!(!json.contains("content_length"));
    }
}
