//! Mirror command - the post-build markdown copy pass.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::mirror::mirror_tree;
use crate::utils::plural_count;

/// Run one mirror pass and report the summary.
///
/// Wired by the hosting generator as a step after the site build; the
/// result never feeds back into the build, and the command always exits
/// successfully so a partial mirror cannot fail an otherwise good build.
pub fn run_mirror(config: &SiteConfig) -> Result<()> {
    let content = &config.build.content;
    let output = &config.build.output;

    log!(
        "mirror";
        "copying markdown sources into {}",
        config.root_relative(output).display()
    );

    let stats = mirror_tree(content, output, config.build.force);

    log!(
        "mirror";
        "{} copied, {} skipped (up-to-date), {}",
        plural_count(stats.copied, "file"),
        stats.skipped,
        plural_count(stats.errors, "error")
    );
    log!("mirror"; "raw markdown ready under {}", config.root_relative(output).display());

    Ok(())
}
