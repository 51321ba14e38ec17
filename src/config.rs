use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::ConfigError;

pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_CHAT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 15;

/// Process-wide settings, read once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub cse_id: String,
    pub deepseek_api_key: String,
    pub search_api_url: String,
    pub chat_api_url: String,
    pub chat_model: String,
    pub bind_addr: String,
    pub fetch_timeout: Duration,
    pub chat_timeout: Duration,
}

impl Config {
    /// Config with the given credentials and every other field at its default.
    pub fn new(google_api_key: &str, cse_id: &str, deepseek_api_key: &str) -> Self {
        Self {
            google_api_key: google_api_key.to_string(),
            cse_id: cse_id.to_string(),
            deepseek_api_key: deepseek_api_key.to_string(),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            chat_timeout: Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS),
        }
    }

    /// Load from the process environment, after pulling in a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_env =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()));
        let get_env_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut config = Config::new(
            &get_env("GOOGLE_API_KEY")?,
            &get_env("CSE_ID")?,
            &get_env("DEEPSEEK_API_KEY")?,
        );
        config.search_api_url = get_env_or_default("SEARCH_API_URL", DEFAULT_SEARCH_API_URL);
        config.chat_api_url = get_env_or_default("CHAT_API_URL", DEFAULT_CHAT_API_URL);
        config.chat_model = get_env_or_default("CHAT_MODEL", DEFAULT_CHAT_MODEL);
        config.bind_addr = get_env_or_default("BIND_ADDR", DEFAULT_BIND_ADDR);
        config.fetch_timeout = parse_secs(
            "FETCH_TIMEOUT_SECS",
            lookup("FETCH_TIMEOUT_SECS"),
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?;
        config.chat_timeout = parse_secs(
            "CHAT_TIMEOUT_SECS",
            lookup("CHAT_TIMEOUT_SECS"),
            DEFAULT_CHAT_TIMEOUT_SECS,
        )?;
        Ok(config)
    }
}

fn parse_secs(key: &str, value: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_secs(default)),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidVar {
                key: key.to_string(),
                value: raw,
            }),
    }
}
