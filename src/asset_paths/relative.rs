/// Express `path` relative to the configured content root.
///
/// Backslashes are treated as forward slashes. When the content root (with surrounding
/// slashes trimmed) is a whole-segment prefix of the path it is removed, and the result is
/// trimmed of leading and trailing slashes. Leading slashes are ignored on both sides, so
/// `var/www/content/a.css` and `/var/www/content/a.css` normalise alike.
pub fn path_relative_to_content_root(path: &str, content_root: &str) -> String {
    let path = path.replace('\\', "/");
    let content_root = content_root.replace('\\', "/");

    let root = content_root.trim_matches('/');
    let trimmed = path.trim_start_matches('/');

    let relative = if root.is_empty() {
        trimmed
    } else {
        match trimmed.strip_prefix(root) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => trimmed,
        }
    };

    relative.trim_matches('/').to_string()
}
