//! HTML tag construction for cache-busted assets.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::asset_paths::make_busted_url;
use crate::config::BusterConfig;
use crate::models::{AssetKind, ResolvedAsset};

/// Default stylesheet template used when the configuration does not provide one.
pub const DEFAULT_CSS_TEMPLATE: &str = r#"<link rel="stylesheet" href="{{URL}}">"#;

/// Default script template used when the configuration does not provide one.
pub const DEFAULT_JS_TEMPLATE: &str = r#"<script src="{{URL}}"></script>"#;

/// Capability for turning a resolved asset into markup.
///
/// [`crate::CacheBuster`] only resolves hashes; everything about the shape of the emitted
/// tags is delegated to an implementation of this trait.
pub trait TagBuilder {
  /// Render the tag referencing `asset`.
  fn build_tag(&self, kind: AssetKind, asset: &ResolvedAsset<'_>) -> String;
}

impl<F> TagBuilder for F
where
  F: Fn(AssetKind, &ResolvedAsset<'_>) -> String,
{
  fn build_tag(&self, kind: AssetKind, asset: &ResolvedAsset<'_>) -> String {
    self(kind, asset)
  }
}

/// Tag builder driven by `{{PLACEHOLDER}}` templates.
///
/// Supported placeholders:
///
/// - `{{ROOT_PATH}}`: public URL prefix the assets are served under.
/// - `{{FILE_PATH}}`: asset path relative to the content root, including the file name.
/// - `{{FILE_DIR}}`: directory part of `FILE_PATH`.
/// - `{{FILE_NAME}}`: file name without its extension.
/// - `{{HASH}}`: cache-busting hash.
/// - `{{URL}}`: `ROOT_PATH/FILE_PATH?v=HASH`.
///
/// Unknown placeholders are left untouched. Substituted values are escaped for use inside
/// double-quoted HTML attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTagBuilder {
  root_path: String,
  css_template: String,
  js_template: String,
}

impl Default for TemplateTagBuilder {
  fn default() -> Self {
    Self {
      root_path: String::new(),
      css_template: DEFAULT_CSS_TEMPLATE.into(),
      js_template: DEFAULT_JS_TEMPLATE.into(),
    }
  }
}

impl TemplateTagBuilder {
  /// Create a builder from explicit templates.
  pub fn new(
    root_path: impl Into<String>,
    css_template: impl Into<String>,
    js_template: impl Into<String>,
  ) -> Self {
    Self {
      root_path: root_path.into(),
      css_template: css_template.into(),
      js_template: js_template.into(),
    }
  }

  /// Create a builder using the root path and templates of a configuration.
  pub fn from_config(config: &BusterConfig) -> Self {
    Self::new(
      config.root_path.clone(),
      config.css_template.clone(),
      config.js_template.clone(),
    )
  }

  fn template(&self, kind: AssetKind) -> &str {
    match kind {
      AssetKind::Css => &self.css_template,
      AssetKind::Js => &self.js_template,
    }
  }
}

impl TagBuilder for TemplateTagBuilder {
  fn build_tag(&self, kind: AssetKind, asset: &ResolvedAsset<'_>) -> String {
    let root_path = self.root_path.trim_end_matches('/');
    let url = make_busted_url(root_path, asset.path, asset.hash);

    placeholder_pattern()
      .replace_all(self.template(kind), |caps: &Captures<'_>| {
        let value = match &caps[1] {
          "ROOT_PATH" => root_path,
          "FILE_PATH" => asset.path,
          "FILE_DIR" => asset.dir(),
          "FILE_NAME" => asset.file_stem(),
          "HASH" => asset.hash,
          "URL" => url.as_str(),
          _ => return caps[0].to_string(),
        };
        escape_attribute(value).into_owned()
      })
      .into_owned()
  }
}

fn placeholder_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"\{\{\s*([A-Z_]+)\s*\}\}").expect("invalid placeholder regex")
  })
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
  if !value.contains(['&', '"', '\'', '<', '>']) {
    return Cow::Borrowed(value);
  }

  let mut escaped = String::with_capacity(value.len() + 8);
  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      other => escaped.push(other),
    }
  }
  Cow::Owned(escaped)
}
