#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod buster;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod tags;

pub use buster::CacheBuster;
pub use config::BusterConfig;
pub use error::{ManifestError, ManifestErrorKind};
pub use manifest::Manifest;
pub use models::{AssetKind, ResolvedAsset};
pub use tags::{TagBuilder, TemplateTagBuilder};
