//! The busters manifest: an immutable mapping from asset key to cache-busting hash.

mod loading;

use std::collections::BTreeMap;

use crate::models::AssetKind;

/// Asset hashes read from the build-generated `busters.json`.
///
/// Keys are kept exactly as written by the build step, which may be full paths or paths
/// relative to the content root. Normalisation happens at lookup time in
/// [`crate::CacheBuster::hash_by_filename`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
  entries: BTreeMap<String, String>,
}

impl Manifest {
  /// Build a manifest from in-memory entries, bypassing the file loader.
  pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      entries: entries
        .into_iter()
        .map(|(key, hash)| (key.into(), hash.into()))
        .collect(),
    }
  }

  /// Exact-key lookup without any path normalisation.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  /// Iterate over all entries in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .entries
      .iter()
      .map(|(key, hash)| (key.as_str(), hash.as_str()))
  }

  /// Iterate over entries whose key carries the extension of `kind`.
  pub fn entries_of_kind(&self, kind: AssetKind) -> impl Iterator<Item = (&str, &str)> {
    self
      .iter()
      .filter(move |(key, _)| crate::asset_paths::asset_kind(key) == Some(kind))
  }

  /// Number of recorded assets.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no assets are recorded.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
