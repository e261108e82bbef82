//! Connection settings for the scripture API.
//!
//! Resolved in priority order:
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment: `KJV_REF_API_KEY`, `KJV_REF_BASE_URL`, `KJV_REF_BIBLE_ID`, `KJV_REF_TIMEOUT_SECS`
//! 3. JSON config file passed with `--config`
//! 4. Compiled defaults (API.Bible, KJV)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.scripture.api.bible/v1";
/// API.Bible id of the King James Version.
pub const DEFAULT_BIBLE_ID: &str = "de4e12af7f28f599-02";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub bible_id: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            bible_id: DEFAULT_BIBLE_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Read a JSON config file; keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Defaults overlaid with whatever `KJV_REF_*` variables are set.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("KJV_REF_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = lookup("KJV_REF_BASE_URL") {
            self.base_url = url;
        }
        if let Some(id) = lookup("KJV_REF_BIBLE_ID") {
            self.bible_id = id;
        }
        if let Some(secs) = lookup("KJV_REF_TIMEOUT_SECS") {
            self.timeout_secs = secs
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid KJV_REF_TIMEOUT_SECS '{}'", secs)))?;
        }
        Ok(self)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
