//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// mdmirror CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Publish output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: mdmirror.toml)
    #[arg(short = 'C', long, global = true, default_value = "mdmirror.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Mirror markdown sources into the publish output (post-build step)
    #[command(visible_alias = "m")]
    Mirror {
        #[command(flatten)]
        mirror_args: MirrorArgs,
    },

    /// Serve the publish output with raw markdown endpoints
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        serve_args: ServeArgs,
    },
}

/// Mirror command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MirrorArgs {
    /// Copy every eligible file, ignoring timestamp freshness
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Serve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
    #[arg(short, long)]
    pub interface: Option<std::net::IpAddr>,

    /// Port number to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
