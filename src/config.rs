use reqwest::Url;
use thiserror::Error;

use crate::i18n::Language;

pub const URL_ENV: &str = "LYRICS_SEARCH_URL";
pub const LANG_ENV: &str = "LYRICS_SEARCH_LANG";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const QUERY_PATH: &str = "/query_lyrics";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("LYRICS_SEARCH_URL is not a valid URL ({value}): {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("LYRICS_SEARCH_LANG: {0}")]
    InvalidLanguage(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the query endpoint.
    pub endpoint: Url,
    pub language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint = endpoint_for(&base)?;

        let language = match lookup(LANG_ENV).filter(|v| !v.trim().is_empty()) {
            Some(code) => code.parse().map_err(ConfigError::InvalidLanguage)?,
            None => Language::default(),
        };

        Ok(Self { endpoint, language })
    }
}

fn endpoint_for(base: &str) -> Result<Url, ConfigError> {
    let invalid = |err: &dyn std::fmt::Display| ConfigError::InvalidUrl {
        value: base.to_string(),
        reason: err.to_string(),
    };
    let parsed = Url::parse(base.trim()).map_err(|e| invalid(&e))?;
    parsed.join(QUERY_PATH).map_err(|e| invalid(&e))
}
