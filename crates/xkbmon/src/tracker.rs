//! Layout tracker: remembers group names and reports the active group.
//!
//! The tracker is fed by whatever watches the keyboard state. That source
//! reports two things:
//! - a new set of group names (a layout reload), handled by
//!   [`LayoutTracker::on_layout_names_changed`] or
//!   [`LayoutTracker::on_layout_names_list`];
//! - a change of the active group, handled by
//!   [`LayoutTracker::on_group_index_changed`].
//!
//! Labels are recomputed wholesale on every reload and looked up on every
//! group change. Groups without a usable name are reported as `G<index>`.

use alloc::string::String;
use core::{convert, fmt};

use bstr::BStr;

use crate::{
    error::TrackerError,
    label::{ShortLabel, build_short_label, full_name},
    options::{LabelMode, TrackerOptions},
};

/// Number of layout groups a keyboard can carry.
pub const MAX_GROUPS: usize = 4;

/// Index of a keyboard layout group, always below [`MAX_GROUPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupIndex(u8);

impl GroupIndex {
    /// Validate a group index.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GroupIndexOutOfRange`] when `index` is not
    /// below [`MAX_GROUPS`].
    pub fn new(index: usize) -> Result<Self, TrackerError> {
        match u8::try_from(index) {
            Ok(slot) if index < MAX_GROUPS => Ok(Self(slot)),
            _ => Err(TrackerError::GroupIndexOutOfRange {
                index,
                max: MAX_GROUPS,
            }),
        }
    }

    /// The index as a slot number.
    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// All valid group indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MAX_GROUPS).filter_map(|index| Self::new(index).ok())
    }
}

impl TryFrom<usize> for GroupIndex {
    type Error = TrackerError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl TryFrom<u32> for GroupIndex {
    type Error = TrackerError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::new(usize::try_from(index).unwrap_or(usize::MAX))
    }
}

impl fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The renderings of one group's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName {
    short: ShortLabel,
    full: String,
}

impl GroupName {
    /// Build both renderings from a raw name.
    #[must_use]
    pub fn new(raw: &[u8]) -> Self {
        Self {
            short: build_short_label(raw),
            full: full_name(raw),
        }
    }

    /// The two-character label.
    #[must_use]
    pub fn short(&self) -> &ShortLabel {
        &self.short
    }

    /// Every valid character of the name.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }
}

/// What the tracker reports for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLabel<'a> {
    /// The group's short label.
    Short(&'a ShortLabel),
    /// The group's full name.
    Full(&'a str),
    /// The group has no usable name; rendered as `<prefix><index>`.
    Fallback {
        /// Leading character of the textual form.
        prefix: char,
        /// The group being reported.
        index: GroupIndex,
    },
}

impl GroupLabel<'_> {
    /// Whether the group had no usable name.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl fmt::Display for GroupLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(label) => label.fmt(f),
            Self::Full(name) => f.write_str(name),
            Self::Fallback { prefix, index } => write!(f, "{prefix}{index}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupLabel<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A group change as reported by [`LayoutTracker::on_group_index_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupChange<'a> {
    /// Number of group changes seen before this one.
    pub sequence: u64,
    /// The newly active group.
    pub index: GroupIndex,
    /// How the group is rendered.
    pub label: GroupLabel<'a>,
}

/// Keeps per-group labels and the active group.
#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    options: TrackerOptions,
    groups: [Option<GroupName>; MAX_GROUPS],
    current: Option<GroupIndex>,
    changes: u64,
}

impl LayoutTracker {
    /// Create a tracker with no known group names.
    #[must_use]
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options the tracker was created with.
    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// Replace all group names.
    ///
    /// Groups missing from `names` become unused. If an index appears more
    /// than once, the last name wins.
    pub fn on_layout_names_changed<I, B>(&mut self, names: I)
    where
        I: IntoIterator<Item = (GroupIndex, B)>,
        B: AsRef<[u8]>,
    {
        self.groups = Default::default();
        for (index, raw) in names {
            self.store(index, raw.as_ref());
        }
        tracing::debug!(groups = self.known_groups(), "layout names reloaded");
    }

    /// Replace all group names from a list in slot order.
    ///
    /// Slot `i` takes `names[i]`. The first `None` ends the list: later
    /// groups are unused even when a name follows. Entries beyond
    /// [`MAX_GROUPS`] are ignored.
    pub fn on_layout_names_list<I, B>(&mut self, names: I)
    where
        I: IntoIterator<Item = Option<B>>,
        B: AsRef<[u8]>,
    {
        self.groups = Default::default();
        for (slot, raw) in names.into_iter().map_while(convert::identity).enumerate() {
            match GroupIndex::new(slot) {
                Ok(index) => self.store(index, raw.as_ref()),
                Err(err) => {
                    tracing::warn!(%err, name = ?BStr::new(raw.as_ref()), "ignoring extra group name");
                    break;
                }
            }
        }
        tracing::debug!(groups = self.known_groups(), "layout names reloaded");
    }

    /// Record a change of the active group and report its label.
    pub fn on_group_index_changed(&mut self, index: GroupIndex) -> GroupChange<'_> {
        let sequence = self.changes;
        self.changes = self.changes.wrapping_add(1);
        self.current = Some(index);
        let label = self.label_for(index);
        tracing::trace!(sequence, %index, %label, "group changed");
        GroupChange {
            sequence,
            index,
            label,
        }
    }

    /// The label reported for `index` under the current names.
    #[must_use]
    pub fn label_for(&self, index: GroupIndex) -> GroupLabel<'_> {
        let fallback = GroupLabel::Fallback {
            prefix: self.options.fallback_prefix,
            index,
        };
        let Some(name) = self.group_name(index) else {
            return fallback;
        };
        match self.options.label_mode {
            LabelMode::Short if !name.short.is_empty() => GroupLabel::Short(&name.short),
            LabelMode::Full if !name.full.is_empty() => GroupLabel::Full(&name.full),
            _ => fallback,
        }
    }

    /// The label of the active group, if a group change was seen.
    #[must_use]
    pub fn current_label(&self) -> Option<GroupLabel<'_>> {
        self.current.map(|index| self.label_for(index))
    }

    /// The active group, if a group change was seen.
    #[must_use]
    pub fn current(&self) -> Option<GroupIndex> {
        self.current
    }

    /// The stored name of `index`, if the slot is in use.
    #[must_use]
    pub fn group_name(&self, index: GroupIndex) -> Option<&GroupName> {
        self.groups[index.get()].as_ref()
    }

    fn store(&mut self, index: GroupIndex, raw: &[u8]) {
        let name = GroupName::new(raw);
        tracing::trace!(%index, raw = ?BStr::new(raw), short = %name.short, "group name");
        self.groups[index.get()] = Some(name);
    }

    fn known_groups(&self) -> usize {
        self.groups.iter().flatten().count()
    }
}
