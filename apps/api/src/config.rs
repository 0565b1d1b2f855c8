use std::time::Duration;

use anyhow::{Context, Result};

use crate::jobs::provider::AdzunaConfig;
use crate::matching::matcher::MatcherConfig;
use crate::matching::similarity::{ScoringConfig, Weighting};

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna: AdzunaConfig,
    pub openai_api_key: String,
    pub match_pages: u32,
    pub match_results_per_page: u32,
    pub provider_timeout: Duration,
    pub weighting: Weighting,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            adzuna: AdzunaConfig {
                app_id: require_env("ADZUNA_APP_ID")?,
                app_key: require_env("ADZUNA_APP_KEY")?,
                country: env_or("ADZUNA_COUNTRY", "us"),
                base_url: env_or("ADZUNA_BASE_URL", DEFAULT_ADZUNA_BASE_URL),
            },
            openai_api_key: require_env("OPENAI_API_KEY")?,
            match_pages: parse_positive_env("MATCH_PAGES", 5)?,
            match_results_per_page: parse_positive_env("MATCH_RESULTS_PER_PAGE", 50)?,
            provider_timeout: Duration::from_secs(parse_env("PROVIDER_TIMEOUT_SECS", 20)?),
            weighting: env_or("MATCH_WEIGHTING", "tf_idf")
                .parse()
                .map_err(anyhow::Error::msg)
                .context("MATCH_WEIGHTING is invalid")?,
            port: parse_env("PORT", 5050)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            pages: self.match_pages,
            results_per_page: self.match_results_per_page,
            fetch_timeout: self.provider_timeout,
            scoring: ScoringConfig {
                weighting: self.weighting,
                ..ScoringConfig::default()
            },
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Like `parse_env`, but zero is a configuration error.
fn parse_positive_env(key: &str, default: u32) -> Result<u32> {
    let value = parse_env(key, default)?;
    anyhow::ensure!(value > 0, "{key} must be at least 1, got 0");
    Ok(value)
}
