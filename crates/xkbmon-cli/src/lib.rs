//! Event-stream front end for `xkbmon`.
//!
//! The keyboard state source is modelled as a line-oriented event stream
//! (see [`protocol`]); [`monitor::run`] feeds it to a
//! [`LayoutTracker`](xkbmon::LayoutTracker) and prints a label on every group
//! change.

pub mod config;
pub mod logging;
pub mod monitor;
pub mod protocol;
