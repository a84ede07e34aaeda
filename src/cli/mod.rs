//! Command-line interface.

mod args;
pub mod mirror;
pub mod serve;

pub use args::{Cli, Commands, MirrorArgs, ServeArgs};
