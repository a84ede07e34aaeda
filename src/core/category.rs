//! Document file classification.

use std::path::Path;

/// Kind of mirrorable document file, determined by its name suffix.
///
/// Matching is exact and case-sensitive; only these two suffixes are
/// recognized, and only at the end of the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    /// Plain markdown (.md)
    Markdown,
    /// Markdown with JSX (.mdx)
    Mdx,
}

impl DocKind {
    /// All recognized document kinds, in lookup order: primary first,
    /// extended second. The dev-server fallback tries them in this order.
    pub const ALL: [Self; 2] = [Self::Markdown, Self::Mdx];

    /// Detect document kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            _ => None,
        }
    }

    /// Detect document kind from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// File extension for this document kind (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Mdx => "mdx",
        }
    }

    /// Check if a path names a mirrorable document file.
    #[inline]
    pub fn is_document(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(DocKind::from_extension("md"), Some(DocKind::Markdown));
        assert_eq!(DocKind::from_extension("mdx"), Some(DocKind::Mdx));
        assert_eq!(DocKind::from_extension("markdown"), None);
        assert_eq!(DocKind::from_extension("html"), None);
    }

    #[test]
    fn test_from_extension_case_sensitive() {
        assert_eq!(DocKind::from_extension("MD"), None);
        assert_eq!(DocKind::from_extension("Mdx"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocKind::from_path(&PathBuf::from("guide/intro.md")),
            Some(DocKind::Markdown)
        );
        assert_eq!(
            DocKind::from_path(&PathBuf::from("guide/intro.mdx")),
            Some(DocKind::Mdx)
        );
        assert_eq!(DocKind::from_path(&PathBuf::from("guide/intro.html")), None);
        assert_eq!(DocKind::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_suffix_matches_only_at_end() {
        // ".md" appearing mid-name must not qualify a file
        assert!(!DocKind::is_document(&PathBuf::from("notes.md.bak")));
        assert!(!DocKind::is_document(&PathBuf::from("intro.md.html")));
        assert!(DocKind::is_document(&PathBuf::from("intro.md")));
    }

    #[test]
    fn test_lookup_order() {
        assert_eq!(DocKind::ALL[0], DocKind::Markdown);
        assert_eq!(DocKind::ALL[1], DocKind::Mdx);
    }
}
