use async_trait::async_trait;
use wordup_config::lookup::LookupConfig;
use wordup_types::WordResult;

use crate::response::LookupResponse;
use crate::{Lookup, LookupError, ProviderMetadata};

/// HTTP client for the dictionary lookup endpoint
#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DictionaryClient {
    pub fn new(config: &LookupConfig) -> Self {
        if config.api_key.is_empty() {
            tracing::warn!("No API key configured, lookups will be sent with a blank bearer token");
        }

        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl Lookup for DictionaryClient {
    async fn lookup(&self, word: &str) -> Result<WordResult, LookupError> {
        tracing::debug!("GET {} word={}", self.api_url, word);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("word", word)])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        body.into_word_result()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "dictionary-api".to_string(),
            endpoint: self.api_url.clone(),
        }
    }
}
