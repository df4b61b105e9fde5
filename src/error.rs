//! Errors raised while loading a busters manifest.

use std::path::PathBuf;

/// Discriminant of a [`ManifestError`], convenient for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestErrorKind {
  /// The manifest file does not exist.
  NotFound,
  /// The manifest file exists but has no content.
  Empty,
  /// The manifest content is not a JSON object of non-empty strings.
  InvalidFormat,
  /// The manifest file could not be read.
  Io,
}

/// Failure to load a busters manifest. All variants are fatal at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  /// No file exists at the configured manifest path.
  #[error("busters json not found at {}", path.display())]
  NotFound {
    /// Configured manifest path.
    path: PathBuf,
  },
  /// The manifest file is present but empty.
  #[error("busters json at {} is empty", path.display())]
  Empty {
    /// Configured manifest path.
    path: PathBuf,
  },
  /// The manifest is not a JSON object mapping asset keys to hash strings.
  #[error("busters json at {} is invalid: {detail}", path.display())]
  InvalidFormat {
    /// Configured manifest path.
    path: PathBuf,
    /// What was wrong with the content.
    detail: String,
  },
  /// Reading the manifest failed for a reason other than absence.
  #[error("failed to read busters json at {}", path.display())]
  Io {
    /// Configured manifest path.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
}

impl ManifestError {
  /// Kind of failure, independent of the path and details.
  pub fn kind(&self) -> ManifestErrorKind {
    match self {
      Self::NotFound { .. } => ManifestErrorKind::NotFound,
      Self::Empty { .. } => ManifestErrorKind::Empty,
      Self::InvalidFormat { .. } => ManifestErrorKind::InvalidFormat,
      Self::Io { .. } => ManifestErrorKind::Io,
    }
  }

  /// Path of the manifest the error refers to.
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::NotFound { path }
      | Self::Empty { path }
      | Self::InvalidFormat { path, .. }
      | Self::Io { path, .. } => path,
    }
  }
}
