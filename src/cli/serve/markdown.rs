//! Raw markdown endpoints for the development server.
//!
//! Requests for `*.md` paths are answered straight from the content tree,
//! bypassing the rendered site. This keeps raw sources fetchable during
//! development the same way the mirrored copies are after a production
//! build. Every hit re-reads from disk: no caching, no conditional
//! requests - this path is never active in production.

use std::path::{Path, PathBuf};

use super::path::normalize_url;
use crate::core::DocKind;

/// Resolve a markdown request against the content tree.
///
/// Returns the first existing candidate, trying the requested path first
/// and then the same path with the extended suffix (`.mdx`). `None` means
/// the request is not a markdown request or neither candidate exists; the
/// caller passes it on to the next stage of the pipeline.
pub fn resolve_markdown(url: &str, content_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    let requested = Path::new(&clean);
    if DocKind::from_path(requested) != Some(DocKind::Markdown) {
        return None;
    }

    let resolved = content_root.join(requested);
    candidates(&resolved).into_iter().find(|p| p.is_file())
}

/// Ordered lookup candidates for a markdown request: one per recognized
/// document suffix, substituted at the end of the name only.
fn candidates(resolved: &Path) -> [PathBuf; 2] {
    DocKind::ALL.map(|kind| resolved.with_extension(kind.extension()))
}
