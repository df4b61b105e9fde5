/// Join the public root path and a content-relative asset path into a URL path.
///
/// The generated URL always uses forward slashes and a single separator between the root
/// and the asset, whatever slashes the configuration or manifest keys carried.
pub fn make_unbusted_url(root_path: &str, relative_path: &str) -> String {
    let root = root_path.replace('\\', "/");
    let relative = relative_path.replace('\\', "/");
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Append the cache-busting hash to the URL of an asset as a `v` query parameter.
pub fn make_busted_url(root_path: &str, relative_path: &str, hash: &str) -> String {
    let url = make_unbusted_url(root_path, relative_path);
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}v={hash}")
}
