// Port for text translation. Stateless: no caching and no retries here.

use async_trait::async_trait;
use thiserror::Error;

/// Language every stored review is written in.
pub const SOURCE_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("translation upstream error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}
