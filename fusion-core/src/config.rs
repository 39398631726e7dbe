use anyhow::{Context, Result};

/// Default Gemini model used when GEMINI_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
}

impl Config {
    /// Load configuration from .env file and environment
    ///
    /// A missing GEMINI_API_KEY is a startup error, so a bad deployment fails
    /// here with a clear message instead of on the first generation call.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is absent

        let gemini_api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            gemini_api_key,
            model,
        })
    }
}
