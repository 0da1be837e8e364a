use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub base_url: String,
    /// Replace the placeholder with a failure message when a request errors.
    pub report_failures: bool,
    /// Drop responses that arrive after a newer request was issued.
    pub discard_stale: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            report_failures: false,
            discard_stale: false,
        }
    }
}

impl FrontendConfig {
    /// Reads `RAG_API_URL`, `RAG_REPORT_FAILURES` and `RAG_DISCARD_STALE`.
    /// Callers load any `.env` file first.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("RAG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let config = Self {
            base_url,
            report_failures: flag("RAG_REPORT_FAILURES")?,
            discard_stale: flag("RAG_DISCARD_STALE")?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API URL: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!("API URL must be http or https: {}", self.base_url));
        }
        Ok(())
    }
}

fn flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_flag(&value)
            .ok_or_else(|| anyhow::anyhow!("{} must be true or false, got {:?}", name, value)),
        Err(_) => Ok(false),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
