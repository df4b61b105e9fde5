//! Cache buster combining the manifest lookup with an injected tag builder.

use crate::asset_paths::{
  asset_kind, is_external_reference, make_busted_url, make_unbusted_url,
  path_relative_to_content_root,
};
use crate::config::BusterConfig;
use crate::error::ManifestError;
use crate::manifest::Manifest;
use crate::models::{AssetKind, ResolvedAsset};
use crate::tags::{TagBuilder, TemplateTagBuilder};

/// Resolves cache-busting hashes for assets and renders the tags referencing them.
///
/// The manifest is read once when the buster is created and never refreshed. Create a new
/// instance to pick up a rebuilt manifest.
#[derive(Debug, Clone)]
pub struct CacheBuster<B = TemplateTagBuilder> {
  manifest: Manifest,
  content_root: String,
  root_path: String,
  builder: B,
}

impl CacheBuster<TemplateTagBuilder> {
  /// Load the manifest named by `config` and render tags from its templates.
  pub fn from_config(config: BusterConfig) -> Result<Self, ManifestError> {
    let builder = TemplateTagBuilder::from_config(&config);
    Self::new(config, builder)
  }
}

impl<B: TagBuilder> CacheBuster<B> {
  /// Load the manifest named by `config`, delegating tag rendering to `builder`.
  pub fn new(config: BusterConfig, builder: B) -> Result<Self, ManifestError> {
    let manifest = Manifest::load(&config.busters_json_path)?;
    Ok(Self::with_manifest(manifest, config, builder))
  }

  /// Build a cache buster around an already loaded manifest.
  pub fn with_manifest(manifest: Manifest, config: BusterConfig, builder: B) -> Self {
    Self {
      manifest,
      content_root: config.content_root,
      root_path: config.root_path,
      builder,
    }
  }

  /// The loaded manifest.
  pub fn manifest(&self) -> &Manifest {
    &self.manifest
  }

  /// Content root used to normalise lookups.
  pub fn content_root(&self) -> &str {
    &self.content_root
  }

  /// Express `path` relative to the configured content root.
  pub fn path_relative_to_content_root(&self, path: &str) -> String {
    path_relative_to_content_root(path, &self.content_root)
  }

  /// Look up the hash recorded for `filename`.
  ///
  /// The name is tried exactly as given first, then relative to the content root, so
  /// callers may pass either a full path or a manifest key. A miss returns `None`.
  pub fn hash_by_filename(&self, filename: &str) -> Option<&str> {
    let relative = self.path_relative_to_content_root(filename);

    let hash = self
      .manifest
      .get(filename)
      .or_else(|| self.manifest.get(&relative));
    if hash.is_none() {
      tracing::debug!(filename, relative = %relative, "No busters hash recorded for asset");
    }
    hash
  }

  /// Tags for every manifest entry of `kind`, one per line in key order.
  pub fn asset(&self, kind: AssetKind) -> String {
    self
      .manifest
      .entries_of_kind(kind)
      .map(|(key, hash)| {
        let path = self.path_relative_to_content_root(key);
        self.builder.build_tag(kind, &ResolvedAsset { path: &path, hash })
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  /// Stylesheet tags for every CSS asset in the manifest.
  pub fn css(&self) -> String {
    self.asset(AssetKind::Css)
  }

  /// Script tags for every JavaScript asset in the manifest.
  pub fn js(&self) -> String {
    self.asset(AssetKind::Js)
  }

  /// Stylesheet tags followed by script tags, separated by a newline.
  pub fn assets(&self) -> String {
    format!("{}\n{}", self.css(), self.js())
  }

  /// Tag for a single asset, or `None` when it is not a stylesheet or script or has no
  /// recorded hash.
  pub fn tag_for(&self, path: &str) -> Option<String> {
    let kind = asset_kind(path)?;
    let hash = self.hash_by_filename(path)?;
    let relative = self.path_relative_to_content_root(path);
    Some(
      self
        .builder
        .build_tag(kind, &ResolvedAsset { path: &relative, hash }),
    )
  }

  /// Public URL for `path` with its hash appended.
  ///
  /// External references are returned unchanged. Assets without a recorded hash get their
  /// plain URL so the page still links to them.
  pub fn url_for(&self, path: &str) -> String {
    if is_external_reference(path) {
      return path.to_string();
    }

    let relative = self.path_relative_to_content_root(path);
    match self.hash_by_filename(path) {
      Some(hash) => make_busted_url(&self.root_path, &relative, hash),
      None => {
        tracing::warn!(path, "Serving asset without cache-busting hash");
        make_unbusted_url(&self.root_path, &relative)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ManifestErrorKind;
  use std::fs;
  use tempfile::tempdir;

  const CONTENT_ROOT: &str = "/var/www/wp-content";

  fn buster() -> CacheBuster {
    let manifest = Manifest::from_entries([
      ("themes/site/style.css", "css1"),
      ("/var/www/wp-content/plugins/forms/forms.css", "css2"),
      ("themes/site/app.js", "js1"),
      ("themes/site/logo.svg", "svg1"),
    ]);
    let config = BusterConfig::new("busters.json").with_content_root(CONTENT_ROOT);
    let builder = TemplateTagBuilder::from_config(&config);
    CacheBuster::with_manifest(manifest, config, builder)
  }

  #[test]
  fn resolves_exact_keys() {
    assert_eq!(buster().hash_by_filename("themes/site/style.css"), Some("css1"));
  }

  #[test]
  fn resolves_full_paths_through_content_root() {
    assert_eq!(
      buster().hash_by_filename("/var/www/wp-content/themes/site/style.css"),
      Some("css1")
    );
  }

  #[test]
  fn resolves_full_paths_without_leading_slash() {
    assert_eq!(
      buster().hash_by_filename("var/www/wp-content/themes/site/style.css"),
      Some("css1")
    );
  }

  #[test]
  fn prefers_exact_full_path_keys() {
    assert_eq!(
      buster().hash_by_filename("/var/www/wp-content/plugins/forms/forms.css"),
      Some("css2")
    );
  }

  #[test]
  fn misses_return_none() {
    let buster = buster();
    assert_eq!(buster.hash_by_filename("themes/site/missing.css"), None);
    assert_eq!(buster.hash_by_filename("/var/www/wp-content/missing.css"), None);
  }

  #[test]
  fn normalises_relative_to_configured_root() {
    assert_eq!(
      buster().path_relative_to_content_root("/var/www/wp-content/themes/a.css"),
      "themes/a.css"
    );
  }

  #[test]
  fn renders_tags_per_kind() {
    let buster = buster();
    assert_eq!(
      buster.css(),
      [
        r#"<link rel="stylesheet" href="/plugins/forms/forms.css?v=css2">"#,
        r#"<link rel="stylesheet" href="/themes/site/style.css?v=css1">"#,
      ]
      .join("\n")
    );
    assert_eq!(
      buster.js(),
      r#"<script src="/themes/site/app.js?v=js1"></script>"#
    );
  }

  #[test]
  fn assets_joins_css_and_js() {
    let buster = buster();
    assert_eq!(buster.assets(), format!("{}\n{}", buster.css(), buster.js()));
  }

  #[test]
  fn empty_manifest_renders_empty_kinds() {
    let buster = CacheBuster::with_manifest(
      Manifest::default(),
      BusterConfig::new("busters.json"),
      TemplateTagBuilder::default(),
    );
    assert_eq!(buster.css(), "");
    assert_eq!(buster.assets(), "\n");
  }

  #[test]
  fn delegates_markup_to_injected_builder() {
    let manifest = Manifest::from_entries([("app.js", "h1")]);
    let buster = CacheBuster::with_manifest(
      manifest,
      BusterConfig::new("busters.json"),
      |kind: AssetKind, asset: &ResolvedAsset<'_>| format!("{kind} {} {}", asset.path, asset.hash),
    );
    assert_eq!(buster.js(), "js app.js h1");
    assert_eq!(buster.tag_for("/app.js"), Some("js app.js h1".to_string()));
  }

  #[test]
  fn tag_for_single_assets() {
    let buster = buster();
    assert_eq!(
      buster.tag_for("/var/www/wp-content/themes/site/app.js").as_deref(),
      Some(r#"<script src="/themes/site/app.js?v=js1"></script>"#)
    );
    assert_eq!(buster.tag_for("themes/site/logo.svg"), None);
    assert_eq!(buster.tag_for("themes/site/missing.js"), None);
  }

  #[test]
  fn url_for_busts_known_assets() {
    let buster = buster();
    assert_eq!(
      buster.url_for("/var/www/wp-content/themes/site/logo.svg"),
      "/themes/site/logo.svg?v=svg1"
    );
  }

  #[test]
  fn url_for_falls_back_to_unbusted_urls() {
    assert_eq!(
      buster().url_for("/var/www/wp-content/themes/site/missing.css"),
      "/themes/site/missing.css"
    );
  }

  #[test]
  fn url_for_passes_external_references_through() {
    assert_eq!(
      buster().url_for("https://cdn.example.com/lib.js"),
      "https://cdn.example.com/lib.js"
    );
  }

  #[test]
  fn from_config_loads_manifest_from_disk() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("busters.json");
    fs::write(&path, r#"{"a.css": "abc123", "b.js": "def456"}"#)
      .expect("failed to write manifest");

    let config = BusterConfig::new(&path).with_root_path("/static/");
    let buster = CacheBuster::from_config(config).unwrap();

    assert_eq!(buster.hash_by_filename("a.css"), Some("abc123"));
    assert_eq!(
      buster.assets(),
      "<link rel=\"stylesheet\" href=\"/static/a.css?v=abc123\">\n<script src=\"/static/b.js?v=def456\"></script>"
    );
  }

  #[test]
  fn construction_fails_on_missing_manifest() {
    let temp = tempdir().expect("failed to create temp dir");
    let config = BusterConfig::new(temp.path().join("busters.json"));
    let err = CacheBuster::from_config(config).unwrap_err();
    assert_eq!(err.kind(), ManifestErrorKind::NotFound);
  }

  #[test]
  fn construction_fails_on_empty_manifest() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("busters.json");
    fs::write(&path, "").expect("failed to write manifest");

    let err = CacheBuster::from_config(BusterConfig::new(&path)).unwrap_err();
    assert_eq!(err.kind(), ManifestErrorKind::Empty);
  }

  #[test]
  fn is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CacheBuster>();
  }
}
