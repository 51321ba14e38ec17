use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidVar { key: String, value: String },
}

/// Failures of the search stage. These are the only errors that fail a whole `/ask` request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("search response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failures of the synthesis stage. The `Display` text is what the caller sees
/// in place of an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("API Error: {0}")]
    Api(String),

    #[error("Error: No valid response from the AI model")]
    NoValidResponse,

    #[error("Error: Unexpected API response format")]
    UnexpectedFormat,
}
