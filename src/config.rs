//! Page-level configuration.
//!
//! Defaults match the blog templates. A page may override any field by
//! embedding a JSON object in `<script id="wf-config" type="application/json">`;
//! absent fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_BACK_TO_TOP_THRESHOLD, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE, DEFAULT_STAGGER_MS,
    DEFAULT_THEME_STORAGE_KEY,
};
use crate::error::ClientError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page_size: u32,
    pub back_to_top_threshold: f64,
    pub stagger_ms: u32,
    /// Base path of the filter endpoint; the category id is appended.
    pub endpoint: String,
    pub storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            stagger_ms: DEFAULT_STAGGER_MS,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the JSON is malformed or a value
    /// is out of range (zero page size, empty endpoint or storage key).
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an override document, falling back to defaults on any error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default page config");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(u64::from(self.stagger_ms))
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.page_size == 0 {
            return Err(ClientError::Config("page_size must be positive".to_owned()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ClientError::Config("endpoint must not be empty".to_owned()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ClientError::Config("storage_key must not be empty".to_owned()));
        }
        if !self.back_to_top_threshold.is_finite() || self.back_to_top_threshold < 0.0 {
            return Err(ClientError::Config("back_to_top_threshold must be a non-negative number".to_owned()));
        }
        Ok(())
    }
}

/// Read the `#wf-config` script element, if present.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn load_from_page(document: &web_sys::Document) -> PageConfig {
    let raw = document
        .get_element_by_id(crate::consts::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content());
    PageConfig::from_json_or_default(raw.as_deref())
}
