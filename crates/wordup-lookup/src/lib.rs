mod client;
mod response;

pub use client::DictionaryClient;
pub use response::{LookupResponse, NO_DEFINITION, RawSense};

use wordup_types::WordResult;

/// Dictionary lookup provider interface
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    /// Fetch the first sense of `word`
    async fn lookup(&self, word: &str) -> Result<WordResult, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response contained no results")]
    NoResults,
}
