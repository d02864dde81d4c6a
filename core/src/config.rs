//! API location.
//!
//! The remote API lives at `{base_url}{cohort}`. Both halves default to the
//! public class API; hosts may override either one.

pub const DEFAULT_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "/2109-CPU-RM-WEB-PT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_COHORT)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, cohort: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            cohort: cohort.to_string(),
        }
    }

    /// Full endpoint prefix with exactly one slash between the halves and
    /// none at the end.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let cohort = self.cohort.trim_matches('/');
        if cohort.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{cohort}")
        }
    }
}
