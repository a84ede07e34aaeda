//! Markdown mirroring into the publish tree.
//!
//! After a production build, a mirror pass replicates every `.md`/`.mdx`
//! file from the content tree into the publish output at the same relative
//! path, so raw sources are fetchable at predictable URLs:
//!
//! ```text
//! docs/                          build/
//! ├── intro.md              →    ├── intro.md
//! ├── img/logo.png               ├── guide/
//! └── guide/                     │   └── setup.mdx
//!     └── setup.mdx         →    └── (rendered site output ...)
//! ```
//!
//! Hidden and dependency-cache directories are never traversed. An existing
//! destination is overwritten only when the source is strictly newer. The
//! pass never deletes publish-tree files whose source has disappeared; wipe
//! the output directory externally for a clean slate.

mod entry;
mod stats;

pub use stats::MirrorStats;

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::core::DocKind;
use crate::freshness::is_dest_fresh;
use crate::{debug, log};
use entry::FsEntry;

/// Dependency-cache directory name, excluded from traversal.
const DEP_CACHE_DIR: &str = "node_modules";

/// Run one mirror pass from the content tree into the publish tree.
///
/// A missing content root is a warning, not an error: the pass is a no-op.
/// Individual file failures are logged and counted; they never abort the
/// remaining traversal. With `force`, freshness checks are bypassed and
/// every eligible file is copied.
pub fn mirror_tree(content_root: &Path, publish_root: &Path, force: bool) -> MirrorStats {
    if !content_root.exists() {
        log!("warning"; "content directory not found: {}", content_root.display());
        return MirrorStats::default();
    }

    mirror_dir(content_root, publish_root, Path::new(""), force)
}

/// Hidden directories and the dependency cache are skipped entirely:
/// not traversed, not copied.
fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('.') || name == DEP_CACHE_DIR
}

/// Mirror one directory level, depth-first.
///
/// Returns the counts for this subtree; the caller merges them upward.
fn mirror_dir(src_dir: &Path, dest_dir: &Path, rel: &Path, force: bool) -> MirrorStats {
    let mut stats = MirrorStats::default();

    let entries = match fs::read_dir(src_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log!("error"; "listing {}: {}", src_dir.display(), e);
            stats.errors += 1;
            return stats;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log!("error"; "listing {}: {}", src_dir.display(), e);
                stats.errors += 1;
                continue;
            }
        };

        let name = entry.file_name();
        let rel_path = rel.join(&name);

        match FsEntry::classify(&entry) {
            Ok(FsEntry::Directory(path)) => {
                if is_excluded_dir(&name.to_string_lossy()) {
                    debug!("mirror"; "skipping {}", rel_path.display());
                    continue;
                }
                stats.merge(mirror_dir(&path, &dest_dir.join(&name), &rel_path, force));
            }
            Ok(FsEntry::File { path, mtime }) => {
                if !DocKind::is_document(&path) {
                    continue;
                }
                stats.merge(mirror_file(
                    &path,
                    &dest_dir.join(&name),
                    &rel_path,
                    mtime,
                    force,
                ));
            }
            Err(e) => {
                log!("error"; "reading {}: {}", rel_path.display(), e);
                stats.errors += 1;
            }
        }
    }

    stats
}

/// Copy a single document file unless the destination is already fresh.
fn mirror_file(
    src: &Path,
    dest: &Path,
    rel: &Path,
    mtime: Option<SystemTime>,
    force: bool,
) -> MirrorStats {
    let mut stats = MirrorStats::default();

    if !force && is_dest_fresh(dest, mtime) {
        debug!("mirror"; "up-to-date: {}", rel.display());
        stats.skipped += 1;
        return stats;
    }

    match copy_file(src, dest) {
        Ok(()) => {
            debug!("mirror"; "{}", rel.display());
            stats.copied += 1;
        }
        Err(e) => {
            log!("error"; "copying {}: {}", rel.display(), e);
            stats.errors += 1;
        }
    }

    stats
}

/// Create the destination's parent directories on demand, then copy.
fn copy_file(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest).map(|_| ())
}
