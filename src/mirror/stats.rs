//! Counters for one mirror pass.

/// Result counters of a mirror pass (or one traversal step of it).
///
/// Each traversal step returns its own counts; parents merge child results
/// upward, so the pass needs no shared mutable state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorStats {
    /// Files copied (new or source newer than destination)
    pub copied: usize,
    /// Files left untouched (destination up-to-date)
    pub skipped: usize,
    /// Per-file failures (copy continued with remaining files)
    pub errors: usize,
}

impl MirrorStats {
    /// Merge the counts of a child traversal step into this one.
    pub fn merge(&mut self, other: Self) {
        self.copied += other.copied;
        self.skipped += other.skipped;
        self.errors += other.errors;
    }
}
