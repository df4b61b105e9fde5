//! Configuration describing where the busters manifest lives and how tags are rendered.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tags::{DEFAULT_CSS_TEMPLATE, DEFAULT_JS_TEMPLATE};

/// File name searched for by [`BusterConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "busters.config.json";

/// Options for a [`crate::CacheBuster`].
///
/// Field names follow the camelCase keys used by front-end build tooling, so a config file
/// reads `{"bustersJsonPath": "busters.json", "contentRoot": "/var/www/content"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusterConfig {
    /// Path of the build-generated JSON manifest.
    pub busters_json_path: PathBuf,
    /// Base directory relative to which manifest keys may be expressed.
    #[serde(default)]
    pub content_root: String,
    /// Public URL prefix the content root is served under.
    #[serde(default)]
    pub root_path: String,
    /// Template for stylesheet tags.
    #[serde(default = "default_css_template")]
    pub css_template: String,
    /// Template for script tags.
    #[serde(default = "default_js_template")]
    pub js_template: String,
}

fn default_css_template() -> String {
    DEFAULT_CSS_TEMPLATE.into()
}

fn default_js_template() -> String {
    DEFAULT_JS_TEMPLATE.into()
}

impl BusterConfig {
    /// Configuration with the given manifest path and defaults for everything else.
    pub fn new(busters_json_path: impl Into<PathBuf>) -> Self {
        Self {
            busters_json_path: busters_json_path.into(),
            content_root: String::new(),
            root_path: String::new(),
            css_template: default_css_template(),
            js_template: default_js_template(),
        }
    }

    /// Set the content root used to normalise lookups.
    pub fn with_content_root(mut self, content_root: impl Into<String>) -> Self {
        self.content_root = content_root.into();
        self
    }

    /// Set the public URL prefix used when rendering tags.
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Read [`DEFAULT_CONFIG_FILE`] from the provided directory.
    ///
    /// A relative manifest path is resolved against `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        let mut config = Self::from_path(&candidate)?;
        config.busters_json_path = config.busters_json_path_in(dir);
        Ok(config)
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("busters config not found at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse busters config at {}", path.display()))
    }

    /// Manifest path resolved against `base` when it is relative.
    pub fn busters_json_path_in(&self, base: &Path) -> PathBuf {
        if self.busters_json_path.is_absolute() {
            self.busters_json_path.clone()
        } else {
            base.join(&self.busters_json_path)
        }
    }
}
