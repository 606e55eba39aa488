//! Process configuration.
//!
//! RULE: The environment is read exactly once, at process entry.
//! Everything downstream receives an explicit `StoreConfig`.

use crate::error::{AnalyticsError, AnalyticsResult};

pub const ENV_STORE_URL: &str = "BANK_STORE_URL";
pub const ENV_STORE_KEY: &str = "BANK_STORE_KEY";

/// Credentials for the hosted record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    /// Read the store endpoint and access key from the environment.
    /// Either variable missing is fatal at startup.
    pub fn from_env() -> AnalyticsResult<Self> {
        let base_url = std::env::var(ENV_STORE_URL)
            .map_err(|_| AnalyticsError::MissingEnv(ENV_STORE_URL))?;
        let api_key = std::env::var(ENV_STORE_KEY)
            .map_err(|_| AnalyticsError::MissingEnv(ENV_STORE_KEY))?;
        Ok(Self::new(&base_url, &api_key))
    }

    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}
