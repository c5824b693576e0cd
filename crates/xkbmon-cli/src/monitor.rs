//! The event loop: read events, update the tracker, print labels.

use std::io::{BufRead, Write};

use anyhow::Context;
use bstr::io::BufReadExt;
use xkbmon::{GroupChange, LayoutTracker};

use crate::{
    config::OutputFormat,
    protocol::{Event, parse_line},
};

/// Counters collected over one event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Layout name reloads applied.
    pub reloads: u64,
    /// Group changes reported.
    pub changes: u64,
    /// Malformed lines skipped.
    pub rejected: u64,
}

/// Drive `tracker` from `input` until end of stream, writing one line per
/// group change to `out`.
///
/// Malformed lines are logged and skipped.
///
/// # Errors
///
/// Fails on I/O errors while reading `input` or writing `out`.
pub fn run<R, W>(
    input: R,
    mut out: W,
    tracker: &mut LayoutTracker,
    format: OutputFormat,
) -> anyhow::Result<Stats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = Stats::default();

    for (number, line) in input.byte_lines().enumerate() {
        let line = line.context("reading event stream")?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Event::Names(names))) => {
                tracker.on_layout_names_list(names);
                stats.reloads += 1;
            }
            Ok(Some(Event::Group(index))) => {
                let change = tracker.on_group_index_changed(index);
                write_change(&mut out, format, &change).context("writing label")?;
                stats.changes += 1;
            }
            Err(err) => {
                tracing::warn!(line = number + 1, %err, "skipping malformed event");
                stats.rejected += 1;
            }
        }
    }

    tracing::debug!(?stats, "event stream closed");
    Ok(stats)
}

fn write_change<W: Write>(
    out: &mut W,
    format: OutputFormat,
    change: &GroupChange<'_>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", change.label)?,
        OutputFormat::Verbose => writeln!(
            out,
            "XkbStateNotify {}, group: {}",
            change.sequence, change.label
        )?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, change)?;
            writeln!(out)?;
        }
    }
    // Labels are consumed live by status bars.
    out.flush()?;
    Ok(())
}
