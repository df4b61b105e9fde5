//! Helpers for normalising asset paths and shaping cache-busted URLs.
//!
//! The responsibilities are split into focused submodules so that content-root
//! normalisation, reference filtering and URL construction can be tested independently.
//! They are shared by the hash resolver and the tag renderers.

mod filters;
mod relative;
mod url;

pub use filters::{asset_kind, is_external_reference};
pub use relative::path_relative_to_content_root;
pub use url::{make_busted_url, make_unbusted_url};
