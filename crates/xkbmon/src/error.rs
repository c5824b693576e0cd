use thiserror::Error;

/// Errors reported by the layout tracker.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    /// A group index at or beyond [`MAX_GROUPS`](crate::MAX_GROUPS).
    #[error("group index {index} out of range (at most {max} groups)")]
    GroupIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of supported groups.
        max: usize,
    },
}
