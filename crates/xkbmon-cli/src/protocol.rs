//! Line protocol spoken by keyboard state sources.
//!
//! One event per line, tokens separated by ASCII whitespace:
//!
//! ```text
//! # comment
//! names English\x20(US) Русская -
//! group 1
//! ```
//!
//! - `names <name>...` lists group names in slot order. Each name uses
//!   backslash escapes (`\xFF`, `\t`, `\x20` for a space, ...); bytes that are
//!   not valid UTF-8 may also appear verbatim. A lone `-` marks an unused slot.
//! - `group <index>` reports that `<index>` became the active group.
//!
//! Blank lines and lines starting with `#` are ignored.

use bstr::{BString, ByteSlice, ByteVec};
use thiserror::Error;
use xkbmon::{GroupIndex, TrackerError};

/// One event from the keyboard state source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New group names in slot order; `None` marks an unused slot.
    Names(Vec<Option<Vec<u8>>>),
    /// The active group changed.
    Group(GroupIndex),
}

/// Why a line could not be turned into an [`Event`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The first token is not a known command.
    #[error("unknown command {0:?}")]
    UnknownCommand(BString),
    /// `group` without an index.
    #[error("missing group index")]
    MissingIndex,
    /// The group index is not a non-negative integer.
    #[error("invalid group index {0:?}")]
    InvalidIndex(BString),
    /// The group index is out of range.
    #[error(transparent)]
    Group(#[from] TrackerError),
    /// Extra tokens after a complete `group` event.
    #[error("unexpected argument {0:?}")]
    TrailingArgument(BString),
}

/// Parse one line of the event stream.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns a [`ProtocolError`] describing the first problem on the line.
pub fn parse_line(line: &[u8]) -> Result<Option<Event>, ProtocolError> {
    let mut tokens = line
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());

    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    if command.starts_with(b"#") {
        return Ok(None);
    }

    match command {
        b"names" => Ok(Some(Event::Names(tokens.map(parse_name).collect()))),
        b"group" => {
            let token = tokens.next().ok_or(ProtocolError::MissingIndex)?;
            let index = token
                .to_str()
                .ok()
                .and_then(|text| text.parse::<usize>().ok())
                .ok_or_else(|| ProtocolError::InvalidIndex(token.into()))?;
            if let Some(extra) = tokens.next() {
                return Err(ProtocolError::TrailingArgument(extra.into()));
            }
            Ok(Some(Event::Group(GroupIndex::new(index)?)))
        }
        other => Err(ProtocolError::UnknownCommand(other.into())),
    }
}

fn parse_name(token: &[u8]) -> Option<Vec<u8>> {
    if token == b"-" {
        return None;
    }
    Some(match token.to_str() {
        Ok(escaped) => Vec::unescape_bytes(escaped),
        Err(_) => token.to_vec(),
    })
}
