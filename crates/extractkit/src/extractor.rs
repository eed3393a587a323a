//! Orchestrator sequencing the extraction pipeline
//!
//! fetch -> select -> normalize -> prompt -> generate, strictly sequential
//! and single-attempt. Every internal error is converted to a structured
//! failure result; nothing escapes to the caller as a fault.

use crate::error::ExtractError;
use crate::fetch::PageFetcher;
use crate::gemini::Generator;
use crate::normalize::{cap, normalize};
use crate::prompt::build_prompt;
use crate::select::select_main_content;
use crate::types::{ExtractionRequest, ExtractionResult, ExtractionType, PageContent, StatusReport};
use crate::{DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_USER_AGENT};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Builder for configuring an [`Extractor`]
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    user_agent: String,
    max_content_length: usize,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ExtractorBuilder {
    /// Set a custom user-agent for page fetches
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the maximum content length before truncation
    pub fn max_content_length(mut self, max: usize) -> Self {
        self.max_content_length = max;
        self
    }

    /// Build the extractor around an injected generation client
    pub fn build(self, generator: Box<dyn Generator>) -> Result<Extractor, ExtractError> {
        let fetcher = PageFetcher::with_user_agent(&self.user_agent)?;
        Ok(Extractor {
            fetcher,
            generator,
            max_content_length: self.max_content_length,
        })
    }
}

/// Sequences the content-extraction pipeline end to end
///
/// Stateless across calls apart from the shared fetch connection pool and
/// the injected generation client; safe to share between concurrent
/// requests.
pub struct Extractor {
    fetcher: PageFetcher,
    generator: Box<dyn Generator>,
    max_content_length: usize,
}

impl Extractor {
    /// Create an extractor with default settings
    pub fn new(generator: Box<dyn Generator>) -> Result<Self, ExtractError> {
        ExtractorBuilder::default().build(generator)
    }

    /// Create a builder for custom settings
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::default()
    }

    /// Report the configured generation model, without side effects
    pub fn status(&self) -> StatusReport {
        StatusReport {
            api_configured: true,
            model: self.generator.model_id().to_string(),
        }
    }

    /// Run the full pipeline for a boundary request
    ///
    /// The extraction type is validated before any network call; an
    /// unrecognized value is rejected with the list of legal values.
    pub async fn extract(&self, request: &ExtractionRequest) -> ExtractionResult {
        let extraction_type = match ExtractionType::from_str(&request.extraction_type) {
            Ok(ty) => ty,
            Err(message) => {
                warn!(extraction_type = %request.extraction_type, "rejected extraction type");
                return ExtractionResult::failure(&request.url, message);
            }
        };
        self.extract_url(&request.url, extraction_type).await
    }

    /// Run the full pipeline for a typed request
    pub async fn extract_url(&self, url: &str, extraction_type: ExtractionType) -> ExtractionResult {
        match self.run_pipeline(url, extraction_type).await {
            Ok(result) => result,
            Err(err) => {
                warn!(url, error = %err, "extraction failed");
                ExtractionResult::failure(url, err.user_message())
            }
        }
    }

    async fn run_pipeline(
        &self,
        url: &str,
        extraction_type: ExtractionType,
    ) -> Result<ExtractionResult, ExtractError> {
        let markup = self.fetcher.fetch(url).await?;

        let page = self.readable_content(url, &markup)?;
        debug!(url, title = %page.title, length = page.length, "content selected");

        let prompt = build_prompt(extraction_type, &page.title, &page.content);
        let extracted_text = self.generator.generate(&prompt).await?;

        info!(url, %extraction_type, length = page.length, "extraction complete");
        Ok(ExtractionResult::success(
            page.url,
            page.title,
            extraction_type,
            page.length,
            extracted_text,
        ))
    }

    /// Select, normalize, and cap the readable content of a page
    fn readable_content(&self, url: &str, markup: &str) -> Result<PageContent, ExtractError> {
        let (title, raw_text) = select_main_content(markup);
        let content = cap(&normalize(&raw_text), self.max_content_length);
        if content.is_empty() {
            return Err(ExtractError::Processing(
                "no readable content found on page".to_string(),
            ));
        }
        let length = content.chars().count();
        Ok(PageContent {
            title,
            content,
            length,
            url: url.to_string(),
        })
    }
}
