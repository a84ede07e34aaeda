//! `[build]` section configuration.
//!
//! Names the two directory roots the mirror pass connects.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "docs"     # Authored markdown sources
//! output = "build"     # Generator's publish output
//! ```
//!
//! Relative paths are resolved against the project root (the directory
//! holding `mdmirror.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build settings: content tree and publish tree locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Content tree root: where markdown sources are authored.
    pub content: PathBuf,

    /// Publish tree root: where the finished site build lands.
    pub output: PathBuf,

    /// Bypass freshness checks and copy everything.
    /// Set from `mirror --force`, never from the config file.
    #[serde(skip)]
    pub force: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("docs"),
            output: PathBuf::from("build"),
            force: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_build_config() {
        let config = test_parse_config("[build]\ncontent = \"pages\"\noutput = \"dist\"");

        assert_eq!(config.build.content, PathBuf::from("pages"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.force);
    }

    #[test]
    fn test_build_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.build.content, PathBuf::from("docs"));
        assert_eq!(config.build.output, PathBuf::from("build"));
    }

    #[test]
    fn test_build_config_partial_override() {
        let config = test_parse_config("[build]\noutput = \"public\"");

        // output is overridden
        assert_eq!(config.build.output, PathBuf::from("public"));
        // content uses default
        assert_eq!(config.build.content, PathBuf::from("docs"));
    }
}
