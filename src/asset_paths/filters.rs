use std::path::Path;

use regex::Regex;

use crate::models::AssetKind;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset reference points outside the local content tree.
///
/// External URLs, protocol-relative URLs and data URIs never appear in the busters
/// manifest, so they are passed through untouched.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// Classify an asset path by its extension, ignoring any query string or fragment.
pub fn asset_kind(path: &str) -> Option<AssetKind> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let extension = Path::new(path).extension()?.to_str()?;

    if extension.eq_ignore_ascii_case(AssetKind::Css.extension()) {
        Some(AssetKind::Css)
    } else if extension.eq_ignore_ascii_case(AssetKind::Js.extension()) {
        Some(AssetKind::Js)
    } else {
        None
    }
}
