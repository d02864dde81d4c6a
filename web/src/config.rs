//! Host configuration from the environment.

use party_core::config::{DEFAULT_BASE_URL, DEFAULT_COHORT};
use party_core::ApiConfig;

use crate::HostError;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub api: ApiConfig,
    pub port: u16,
}

impl HostConfig {
    /// Reads `PARTY_API_BASE`, `PARTY_API_COHORT` and `PORT`.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let base_url = lookup("PARTY_API_BASE").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let cohort = lookup("PARTY_API_COHORT").unwrap_or_else(|| DEFAULT_COHORT.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api: ApiConfig::new(&base_url, &cohort),
            port,
        })
    }
}
