use serde::Deserialize;

use crate::config::Config;
use crate::error::SearchError;

/// Prepended to every user question before it reaches the search provider.
pub const JURISDICTION_PREFIX: &str = "Kazakhstan law";

/// Restricts hits to the `.kz` domain and to PDF/HTML documents.
pub const SEARCH_FILTER: &str = "site:.kz filetype:pdf OR filetype:html";

pub const LANGUAGE_HINT: &str = "lang_kk";

pub const PAGE_SIZE: usize = 5;

pub fn jurisdiction_query(query: &str) -> String {
    format!("{JURISDICTION_PREFIX} {query}")
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

/// Client for the custom-search provider.
pub struct DocumentSearch {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    engine_id: String,
}

impl DocumentSearch {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.search_api_url.clone(),
            api_key: config.google_api_key.clone(),
            engine_id: config.cse_id.clone(),
        }
    }

    /// Returns up to [`PAGE_SIZE`] document URLs in provider relevance order.
    ///
    /// A response without an `items` field (including provider error bodies)
    /// yields an empty list. Transport failures and non-JSON bodies are errors.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let q = format!("{query} {SEARCH_FILTER}");
        let num = PAGE_SIZE.to_string();
        log::info!("searching: {q}");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", q.as_str()),
                ("lr", LANGUAGE_HINT),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(SearchError::Request)?;

        if !response.status().is_success() {
            log::warn!("search provider returned status {}", response.status());
        }

        let body: SearchResponse = response.json().await.map_err(SearchError::Decode)?;
        let links: Vec<String> = body
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.link)
            .take(PAGE_SIZE)
            .collect();

        log::info!("search returned {} links", links.len());
        Ok(links)
    }
}

#[test]
fn test_jurisdiction_query() {
    assert_eq!(
        jurisdiction_query("What are the penalties for tax evasion?"),
        "Kazakhstan law What are the penalties for tax evasion?"
    );
}
