/// Which rendering of a group name the tracker reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelMode {
    /// The two-character [`ShortLabel`](crate::ShortLabel).
    #[default]
    Short,
    /// Every valid character of the name.
    Full,
}

/// Configuration options for the layout tracker.
///
/// # Examples
///
/// ```rust
/// use xkbmon::{LabelMode, LayoutTracker, TrackerOptions};
///
/// let tracker = LayoutTracker::new(TrackerOptions {
///     label_mode: LabelMode::Full,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerOptions {
    /// How group names are rendered.
    ///
    /// # Default
    ///
    /// [`LabelMode::Short`]
    pub label_mode: LabelMode,

    /// Prefix of the textual form used for groups without a usable name.
    ///
    /// A group `2` with no name is reported as `G2` by default.
    ///
    /// # Default
    ///
    /// `'G'`
    pub fallback_prefix: char,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            label_mode: LabelMode::Short,
            fallback_prefix: 'G',
        }
    }
}
