//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xkbmon::{LabelMode, TrackerOptions};

/// How group changes are written to standard output.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the label.
    #[default]
    Plain,
    /// `XkbStateNotify <sequence>, group: <label>`.
    Verbose,
    /// One JSON object per change.
    Json,
}

/// Print a label for the active keyboard layout group on every change.
///
/// Reads layout events (`names ...`, `group <index>`) one per line and
/// reports the first two characters of the active group's name, or
/// `G<index>` when the group has no usable name.
#[derive(Parser, Debug)]
#[command(name = "xkbmon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example:\n  printf 'names us Русская\\ngroup 1\\n' | xkbmon")]
pub struct Cli {
    /// Event stream to read; `-` reads standard input.
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Report whole layout names instead of two-character labels.
    #[arg(long, env = "XKBMON_FULL_NAMES")]
    pub full_names: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Prefix printed before the index of groups without a usable name.
    #[arg(long, default_value_t = 'G')]
    pub fallback_prefix: char,

    /// Log filter in `RUST_LOG` syntax; logs go to standard error.
    #[arg(long, env = "XKBMON_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl Cli {
    /// Whether events come from standard input.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Tracker configuration selected on the command line.
    #[must_use]
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            label_mode: if self.full_names {
                LabelMode::Full
            } else {
                LabelMode::Short
            },
            fallback_prefix: self.fallback_prefix,
        }
    }
}
