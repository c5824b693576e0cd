//! Short labels for keyboard layout groups.
//!
//! The core of the crate is a strict UTF-8 decoder ([`decode`]) and the
//! short-label builder on top of it ([`build_short_label`]), which keeps the
//! first two well-formed characters of an arbitrary, possibly malformed,
//! layout name in a fixed nine-byte buffer. [`LayoutTracker`] wires both to a
//! keyboard state source: it rebuilds labels when group names change and
//! reports the label of the active group on every group change.
//!
//! ```rust
//! use xkbmon::{GroupIndex, LayoutTracker, TrackerOptions};
//!
//! let mut tracker = LayoutTracker::new(TrackerOptions::default());
//! tracker.on_layout_names_list([Some("English (US)"), Some("Русская"), None]);
//!
//! let ru = GroupIndex::new(1).unwrap();
//! assert_eq!(tracker.on_group_index_changed(ru).label.to_string(), "Ру");
//!
//! let unused = GroupIndex::new(3).unwrap();
//! assert_eq!(tracker.on_group_index_changed(unused).label.to_string(), "G3");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod label;
mod options;
mod tracker;

#[cfg(test)]
mod tests;

pub use decoder::{Decoded, MAX_UTF8_LEN, ValidScalars, decode};
pub use error::TrackerError;
pub use label::{LABEL_CAPACITY, MAX_LABEL_CHARS, ShortLabel, build_short_label, full_name};
pub use options::{LabelMode, TrackerOptions};
pub use tracker::{GroupChange, GroupIndex, GroupLabel, GroupName, LayoutTracker, MAX_GROUPS};
