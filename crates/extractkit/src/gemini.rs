//! Gemini generation client
//!
//! One-shot `generateContent` calls with near-deterministic sampling.
//! Every failure mode (transport, quota, malformed response) is converted
//! to [`ExtractError::Generation`]; nothing propagates unhandled.

use crate::error::ExtractError;
use crate::DEFAULT_MODEL;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Public Gemini API endpoint
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Total timeout for one generation call
const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Opaque text-generation collaborator: prompt in, text out or failure
#[async_trait]
pub trait Generator: Send + Sync {
    /// Active model identifier, for the status surface
    fn model_id(&self) -> &str;

    /// Generate text for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, ExtractError>;
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Sampling parameters pinned near-deterministic with a bounded output
#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 4096,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini `generateContent` REST API
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key intentionally omitted
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Create a client with an explicit key and model
    ///
    /// A missing key is a construction-time configuration error, never a
    /// deferred first-use fault.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ExtractError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ExtractError::Configuration(
                "Gemini API key is required. Set GEMINI_API_KEY environment variable.".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .map_err(|e| {
                ExtractError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from `GEMINI_API_KEY` and optional `GEMINI_MODEL`
    pub fn from_env() -> Result<Self, ExtractError> {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Override the API base URL (used by tests to point at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl Generator for GeminiClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ExtractError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "calling generation API");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("generation request failed: {}", e);
                ExtractError::Generation(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "generation API returned error status");
            return Err(ExtractError::Generation(format!(
                "API returned status {}",
                status
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            ExtractError::Generation(format!("malformed response: {}", e))
        })?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ExtractError::Generation(
                "response contained no text candidate".to_string(),
            ));
        }
        Ok(text)
    }
}
