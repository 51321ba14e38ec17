use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::data_models::{AggregatedContext, Answer};
use crate::error::SynthesisError;

pub const SYSTEM_PROMPT: &str = "You are a legal expert specializing in Kazakhstan law. \
Base your answers strictly on the Republic of Kazakhstan's legal framework. \
If information is unavailable, state that clearly.";

pub const TEMPERATURE: f64 = 0.3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

impl ChatRequest {
    pub fn new(model: &str, context: &AggregatedContext, query: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Context:\n{}\n\nQuestion: {query}", context.as_str()),
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

/// Client for the chat-completion provider.
pub struct AnswerSynthesizer {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl AnswerSynthesizer {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            url: config.chat_api_url.clone(),
            api_key: config.deepseek_api_key.clone(),
            model: config.chat_model.clone(),
            timeout: config.chat_timeout,
        }
    }

    fn headers(&self) -> Result<HeaderMap, SynthesisError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| SynthesisError::Api(e.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn synthesize(&self, context: &AggregatedContext, query: &str) -> Answer {
        let result = self.complete(&ChatRequest::new(&self.model, context, query)).await;
        if let Err(e) = &result {
            log::error!("answer synthesis failed: {e}");
        }
        Answer::from(result)
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, SynthesisError> {
        log::debug!("chat completion request, model: {}", request.model);

        let response = self
            .http
            .post(&self.url)
            .headers(self.headers()?)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| SynthesisError::Api(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SynthesisError::Api(e.to_string()))?;
        log::debug!("chat completion response: {body}");

        extract_answer(&body)
    }
}

/// Pulls `choices[0].message.content` out of a chat-completion body.
///
/// An empty `choices` list means the model produced nothing; any other
/// structural mismatch is a format error.
/// A missing `choices` key stays `UnexpectedFormat`, never `NoValidResponse`:
/// callers tell the two cases apart by their strings.
pub fn extract_answer(body: &Value) -> Result<String, SynthesisError> {
    let choices = body
        .get("choices")
        .and_then(Value::as_array)
        .ok_or(SynthesisError::UnexpectedFormat)?;

    let first = choices.first().ok_or(SynthesisError::NoValidResponse)?;

    first
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SynthesisError::UnexpectedFormat)
}
