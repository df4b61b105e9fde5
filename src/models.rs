//! Value types shared by the manifest lookup and the tag renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of static asset a manifest entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
  /// Stylesheet rendered as a `<link>` tag.
  Css,
  /// Script rendered as a `<script>` tag.
  Js,
}

impl AssetKind {
  /// File extension (without the dot) associated with the kind.
  pub fn extension(self) -> &'static str {
    match self {
      Self::Css => "css",
      Self::Js => "js",
    }
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// An asset whose cache-busting hash has been found in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAsset<'a> {
  /// Path of the asset relative to the content root, without surrounding slashes.
  pub path: &'a str,
  /// Hash recorded for the asset.
  pub hash: &'a str,
}

impl<'a> ResolvedAsset<'a> {
  /// Directory portion of [`Self::path`], empty for top-level assets.
  pub fn dir(&self) -> &'a str {
    self.path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
  }

  /// File name of the asset without its directory or final extension.
  pub fn file_stem(&self) -> &'a str {
    let name = self
      .path
      .rsplit_once('/')
      .map(|(_, name)| name)
      .unwrap_or(self.path);
    match name.rsplit_once('.') {
      Some((stem, _)) if !stem.is_empty() => stem,
      _ => name,
    }
  }
}
