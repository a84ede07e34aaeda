//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve URL to filesystem path, handling index.html for directories
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    // This prevents traversal via symlinks or encoded sequences
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        // Path escapes serve_root - reject
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Normalize URL: decode, strip query string, trim slashes
pub(super) fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("/guide/intro.md"), "guide/intro.md");
        assert_eq!(normalize_url("/guide/intro.md?raw=1"), "guide/intro.md");
        assert_eq!(normalize_url("/guide%20notes/a.md"), "guide notes/a.md");
        assert_eq!(normalize_url("/"), "");
    }

    #[test]
    fn test_resolve_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.js"), "js").unwrap();

        let resolved = resolve_path("/app.js", dir.path()).unwrap();
        assert!(resolved.ends_with("app.js"));
    }

    #[test]
    fn test_resolve_directory_index() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("guide/index.html"), "<html>").unwrap();

        let resolved = resolve_path("/guide/", dir.path()).unwrap();
        assert!(resolved.ends_with("guide/index.html"));
    }

    #[test]
    fn test_resolve_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_path("/nope.html", dir.path()).is_none());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let outside = dir.path().join("secret.txt");
        fs::write(&outside, "secret").unwrap();

        let root = dir.path().join("public");
        fs::create_dir(&root).unwrap();

        assert!(resolve_path("/../secret.txt", &root).is_none());
    }
}
