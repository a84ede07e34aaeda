//! Site configuration management for `mdmirror.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] - content and output directories
//! │   └── serve      # [serve] - development server
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is discovered by upward search from the working
//! directory; the project root is the config file's parent directory.
//! When no file exists, defaults apply (content `docs/`, output `build/`)
//! and CLI options can still override them.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, ServeConfig};
pub use types::{ConfigError, cfg, init_config};

use crate::cli::{Cli, Commands};
use crate::log;
use crate::utils::path::normalize_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing mdmirror.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings (content and output directories)
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            build: BuildConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is determined by the config file's parent directory, or cwd when no
    /// config file exists.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists {
            Self::from_path(&config_path)?
        } else {
            crate::debug!("config"; "no {} found, using defaults", cli.config.display());
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        Ok(config)
    }

    /// Resolve config file path by upward search from cwd.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.root = root;
        self.normalize_paths();
        self.apply_command_options(cli);
    }

    /// Resolve content/output directories against the project root.
    fn normalize_paths(&mut self) {
        self.build.content = normalize_path(&self.root_join(&self.build.content));
        self.build.output = normalize_path(&self.root_join(&self.build.output));
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since it's always at the project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        // Global directory overrides
        if let Some(content) = &cli.content {
            self.build.content = normalize_path(content);
        }
        if let Some(output) = &cli.output {
            self.build.output = normalize_path(output);
        }

        match &cli.command {
            Commands::Mirror { mirror_args } => {
                crate::logger::set_verbose(mirror_args.verbose);
                self.build.force = mirror_args.force;
            }
            Commands::Serve { serve_args } => {
                crate::logger::set_verbose(serve_args.verbose);
                if let Some(interface) = serve_args.interface {
                    self.serve.interface = interface;
                }
                if let Some(port) = serve_args.port {
                    self.serve.port = port;
                }
            }
        }
    }
}

/// Parse a config from a TOML string for tests.
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> SiteConfig {
    SiteConfig::from_str(content).expect("config should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("docs"));
        assert_eq!(config.build.output, PathBuf::from("build"));
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[build]\ncontent = \"docs\"\nfuture_knob = true")
                .unwrap();
        assert_eq!(ignored, vec!["build.future_knob".to_string()]);
    }

    #[test]
    fn test_known_fields_are_not_collected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[build]\ncontent = \"docs\"\n[serve]\nport = 4000")
                .unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SiteConfig::from_str("[build\ncontent=").is_err());
    }

    #[test]
    fn test_root_relative() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/site");

        assert_eq!(
            config.root_relative(Path::new("/site/docs/a.md")),
            PathBuf::from("docs/a.md")
        );
        // Paths outside the root pass through unchanged
        assert_eq!(
            config.root_relative(Path::new("/elsewhere/a.md")),
            PathBuf::from("/elsewhere/a.md")
        );
    }

    #[test]
    fn test_root_join() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/site");
        assert_eq!(config.root_join("docs"), PathBuf::from("/site/docs"));
    }

    #[test]
    fn test_cli_overrides_file_settings() {
        use clap::Parser;

        let cli: &'static Cli = Box::leak(Box::new(
            Cli::try_parse_from(["mdmirror", "serve", "-p", "8080"]).unwrap(),
        ));

        let mut config = test_parse_config("[serve]\nport = 4000");
        config.apply_command_options(cli);

        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_mirror_force_flag_reaches_config() {
        use clap::Parser;

        let cli: &'static Cli = Box::leak(Box::new(
            Cli::try_parse_from(["mdmirror", "mirror", "--force"]).unwrap(),
        ));

        let mut config = SiteConfig::default();
        config.apply_command_options(cli);

        assert!(config.build.force);
    }
}
