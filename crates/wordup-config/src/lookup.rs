use std::env;

use serde::Deserialize;

fn default_api_url() -> String {
    "http://localhost:3000/words".to_string()
}

/// Dictionary lookup endpoint and credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token. Not validated; an empty token is sent as-is.
    #[serde(default)]
    pub api_key: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_url = env::var("WORDUP_API_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("WORDUP_API_KEY").unwrap_or_default();

        Self { api_url, api_key }
    }
}
