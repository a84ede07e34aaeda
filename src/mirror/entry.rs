//! Filesystem entry classification for the mirror traversal.

use std::fs::DirEntry;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

/// Closed classification of a directory entry produced by the traversal.
///
/// The walker matches on this variant instead of probing metadata at each
/// use site. Symlinks are followed, so a link to a directory classifies as
/// `Directory` and a dangling link is a classification error.
#[derive(Debug)]
pub enum FsEntry {
    /// A subdirectory to recurse into (unless excluded)
    Directory(PathBuf),
    /// A leaf file with its modification time, when readable
    File {
        path: PathBuf,
        mtime: Option<SystemTime>,
    },
}

impl FsEntry {
    /// Classify a raw directory entry.
    ///
    /// Fails only when the entry's metadata cannot be read at all; the
    /// caller treats that as a per-file error and moves on.
    pub fn classify(entry: &DirEntry) -> io::Result<Self> {
        let path = entry.path();
        let metadata = std::fs::metadata(&path)?;

        if metadata.is_dir() {
            Ok(Self::Directory(path))
        } else {
            Ok(Self::File {
                path,
                mtime: metadata.modified().ok(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn classify_all(dir: &std::path::Path) -> Vec<FsEntry> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| FsEntry::classify(&e.unwrap()).unwrap())
            .collect();
        entries.sort_by_key(|e| match e {
            FsEntry::Directory(p) => p.clone(),
            FsEntry::File { path, .. } => path.clone(),
        });
        entries
    }

    #[test]
    fn test_classify_directory_and_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a_sub")).unwrap();
        fs::write(dir.path().join("b_doc.md"), "# hi").unwrap();

        let entries = classify_all(dir.path());
        assert_eq!(entries.len(), 2);

        assert!(matches!(&entries[0], FsEntry::Directory(p) if p.ends_with("a_sub")));
        match &entries[1] {
            FsEntry::File { path, mtime } => {
                assert!(path.ends_with("b_doc.md"));
                assert!(mtime.is_some());
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_dangling_symlink_is_error() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing.md"), dir.path().join("broken.md"))
            .unwrap();

        let entry = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        assert!(FsEntry::classify(&entry).is_err());
    }
}
