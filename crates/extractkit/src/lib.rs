//! ExtractKit - article extraction and LLM summarization pipeline
//!
//! Fetches a web page, strips it to readable article text, and forwards
//! that text to a generation model to produce one of four structured
//! summaries.
//!
//! ## Pipeline
//!
//! [`PageFetcher`] fetches raw markup, [`select_main_content`] removes
//! noise and picks the best content subtree, [`normalize`] flattens the
//! text, [`build_prompt`] assembles the per-type prompt, and a
//! [`Generator`] (by default [`GeminiClient`]) produces the final text.
//! [`Extractor`] sequences the stages and shapes every outcome into an
//! [`ExtractionResult`].
//!
//! ```no_run
//! use extractkit::{Extractor, ExtractionRequest, GeminiClient};
//!
//! # async fn run() -> Result<(), extractkit::ExtractError> {
//! let client = GeminiClient::from_env()?;
//! let extractor = Extractor::new(Box::new(client))?;
//! let result = extractor.extract(&ExtractionRequest::new("https://example.com")).await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extractor;
pub mod fetch;
pub mod gemini;
pub mod normalize;
pub mod prompt;
pub mod select;
pub mod types;

pub use error::ExtractError;
pub use extractor::{Extractor, ExtractorBuilder};
pub use fetch::PageFetcher;
pub use gemini::{GeminiClient, Generator};
pub use normalize::{cap, normalize, TRUNCATION_MARKER};
pub use prompt::build_prompt;
pub use select::select_main_content;
pub use types::{
    ExtractionRequest, ExtractionResult, ExtractionType, PageContent, StatusReport,
};

/// Desktop-browser User-Agent sent with page fetches
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default generation model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Maximum normalized content length before truncation
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 100_000;
