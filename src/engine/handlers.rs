//! Command handler for a digest run.

use anyhow::{Context, Result};

use crate::cancel::CancelToken;
use crate::engine::Cli;
use crate::engine::output::render_digest_lines;
use crate::types::DigestOpts;
use crate::utils::setup_logging;

/// Build DigestOpts from CLI flags.
fn opts_from_cli(cli: &Cli) -> DigestOpts {
    DigestOpts {
        workers: cli.workers,
        follow_links: cli.follow_links.unwrap_or(false),
        exclude: cli.exclude.clone(),
        keep_going: cli.keep_going.unwrap_or(false),
    }
}

/// Handle a digest run end to end: logging, Ctrl+C wiring, pipeline, output.
/// Nothing is printed until the run has fully succeeded.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose.unwrap_or(false));
    let opts = opts_from_cli(cli);

    let token = CancelToken::new();
    let handler_token = token.clone();
    ctrlc::set_handler(move || handler_token.cancel()).context("set Ctrl+C handler")?;

    let report = crate::digest_dir_with_token(&cli.dir, &opts, token)?;
    for line in render_digest_lines(&report.files) {
        println!("{line}");
    }
    if !report.skipped.is_empty() {
        log::warn!("skipped {} unreadable files", report.skipped.len());
    }
    Ok(())
}
