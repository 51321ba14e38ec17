use anyhow::{Context, Result};

use crate::api::models::{AskRequest, AskResponse};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Talks to a running `/ask` server.
pub struct AskClient {
    http: reqwest::Client,
    server_url: String,
}

impl AskClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn ask(&self, query: &str) -> Result<String> {
        let url = format!("{}/ask", self.server_url);
        let res = self
            .http
            .post(&url)
            .json(&AskRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("server returned {status}: {body}");
        }

        let body: AskResponse = res.json().await.context("Failed to decode server response")?;
        Ok(body.response)
    }
}
