//! # Configuration Module
//!
//! Service configuration read from a YAML file, typically `config/config.yaml`:
//!
//! ```yaml
//! document: doc/openapi.yaml      # file path or http(s) URL
//! watch: true                     # reload the document file on change
//! http:
//!   addr: 0.0.0.0:8080
//!   fetch_timeout_ms: 5000
//! links:
//!   substitution: template        # positional | template | strict
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use crate::document::DocumentSource;
use crate::links::SubstitutionMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document location, parsed with [`DocumentSource::parse`]
    pub document: Option<String>,
    pub watch: bool,
    pub http: HttpConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub addr: String,
    pub fetch_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            fetch_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub substitution: SubstitutionMode,
}

impl AppConfig {
    /// Read and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to `null`; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    #[must_use]
    pub fn document_source(&self) -> Option<DocumentSource> {
        self.document.as_deref().map(DocumentSource::parse)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.http.fetch_timeout_ms)
    }
}
