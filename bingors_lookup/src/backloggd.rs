use async_trait::async_trait;
use bingors_core::LookupResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::GameLookup;
use crate::cover::extract_cover_url;
use crate::error::{LookupError, Result};

/// Lookup client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Root of the game database site
    #[serde(default = "LookupConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "LookupConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "LookupConfig::default_user_agent")]
    pub user_agent: String,

    /// Maximum response size (bytes)
    #[serde(default = "LookupConfig::default_max_size")]
    pub max_size: usize,

    /// Quiet period before a search is sent (milliseconds)
    #[serde(default = "LookupConfig::default_debounce_ms")]
    pub debounce_ms: u64,
}

impl LookupConfig {
    fn default_base_url() -> String {
        "https://backloggd.com".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; bingors/1.0)".to_string()
    }

    const fn default_max_size() -> usize {
        1_000_000 // 1MB
    }

    const fn default_debounce_ms() -> u64 {
        300
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_size: Self::default_max_size(),
            debounce_ms: Self::default_debounce_ms(),
        }
    }
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    suggestions: Vec<LookupResult>,
}

/// Client for the Backloggd autocomplete endpoint and game pages.
pub struct BackloggdClient {
    client: Client,
    base_url: Url,
    config: LookupConfig,
}

impl BackloggdClient {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::BaseUrl(config.base_url));
        }
        // Endpoints are joined onto the base, which drops a last segment
        // without a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// `<base>/autocomplete.json?filter_editions=true&query=<query>`
    pub fn autocomplete_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join("autocomplete.json")?;
        url.query_pairs_mut()
            .append_pair("filter_editions", "true")
            .append_pair("query", query);
        Ok(url)
    }

    /// `<base>/games/<slug>` with the slug escaped as one path segment.
    pub fn game_url(&self, slug: &str) -> Result<Url> {
        let mut url = self.base_url.join("games/")?;
        url.path_segments_mut()
            .map_err(|()| LookupError::BaseUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .push(slug);
        Ok(url)
    }

    async fn fetch(&self, url: Url, accept: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header("Accept", accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if bytes.len() > self.config.max_size {
            return Err(LookupError::TooLarge {
                size: bytes.len(),
                max: self.config.max_size,
            });
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl GameLookup for BackloggdClient {
    async fn search(&self, query: &str) -> Result<Vec<LookupResult>> {
        let url = self.autocomplete_url(query)?;
        let body = self.fetch(url, "application/json").await?;
        let response: AutocompleteResponse = serde_json::from_slice(&body)?;
        info!(
            "Search \"{}\" returned {} suggestions",
            query,
            response.suggestions.len()
        );
        Ok(response.suggestions)
    }

    async fn fetch_image(&self, slug: &str) -> Result<String> {
        let url = self.game_url(slug)?;
        let body = self.fetch(url, "text/html").await?;
        let html = String::from_utf8_lossy(&body);
        let cover =
            extract_cover_url(&html).ok_or_else(|| LookupError::CoverNotFound(slug.to_string()))?;
        info!("Resolved cover for {slug}");
        Ok(cover)
    }
}
