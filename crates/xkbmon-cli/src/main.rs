//! `xkbmon`: print a short label for the active keyboard layout group.

use std::{
    fs::File,
    io::{self, BufReader},
};

use anyhow::Context;
use clap::Parser;
use xkbmon::LayoutTracker;
use xkbmon_cli::{config::Cli, logging, monitor};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_filter)?;

    let mut tracker = LayoutTracker::new(cli.tracker_options());
    let out = io::stdout().lock();

    let stats = if cli.reads_stdin() {
        monitor::run(io::stdin().lock(), out, &mut tracker, cli.format)?
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("opening {}", cli.input.display()))?;
        monitor::run(BufReader::new(file), out, &mut tracker, cli.format)?
    };

    tracing::info!(
        reloads = stats.reloads,
        changes = stats.changes,
        rejected = stats.rejected,
        "done"
    );
    Ok(())
}
