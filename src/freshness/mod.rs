//! Mtime-based freshness detection for mirrored files.
//!
//! The mirror pass compares source and destination modification times to
//! decide whether a copy is needed. Timestamps are reliable here because the
//! destination files are only ever written by the mirror pass itself.

use std::path::Path;
use std::time::SystemTime;

/// Check if a destination file is fresh relative to the given source mtime
///
/// Returns `true` if the destination exists and is at least as new as
/// `source_mtime`, meaning the copy can be skipped. A missing destination,
/// an unreadable destination mtime, or an unknown source mtime all report
/// `false` (copy unconditionally).
pub fn is_dest_fresh(dest: &Path, source_mtime: Option<SystemTime>) -> bool {
    let Some(source_time) = source_mtime else {
        return false;
    };

    dest.metadata()
        .and_then(|m| m.modified())
        .map(|dest_time| dest_time >= source_time)
        .unwrap_or(false)
}

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_missing_dest_is_stale() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing.md");
        assert!(!is_dest_fresh(&dest, Some(SystemTime::now())));
    }

    #[test]
    fn test_unknown_source_mtime_is_stale() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("doc.md");
        fs::write(&dest, "content").unwrap();
        assert!(!is_dest_fresh(&dest, None));
    }

    #[test]
    fn test_newer_dest_is_fresh() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("doc.md");
        fs::write(&dest, "content").unwrap();

        let older = SystemTime::now() - Duration::from_secs(60);
        assert!(is_dest_fresh(&dest, Some(older)));
    }

    #[test]
    fn test_older_dest_is_stale() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("doc.md");
        fs::write(&dest, "content").unwrap();

        let newer = SystemTime::now() + Duration::from_secs(60);
        assert!(!is_dest_fresh(&dest, Some(newer)));
    }

    #[test]
    fn test_get_mtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        assert!(get_mtime(&path).is_none());

        fs::write(&path, "content").unwrap();
        assert!(get_mtime(&path).is_some());
    }
}
