//! Short labels: the first two valid characters of a layout name.

use alloc::string::String;
use core::fmt;

use bstr::ByteSlice;

use crate::decoder::{MAX_UTF8_LEN, ValidScalars};

/// Number of characters a short label keeps.
pub const MAX_LABEL_CHARS: usize = 2;

/// Size of the label buffer: two encoded scalars plus a NUL terminator.
pub const LABEL_CAPACITY: usize = MAX_LABEL_CHARS * MAX_UTF8_LEN + 1;

/// A fixed-capacity, NUL-terminated label of at most two characters.
///
/// The encoded content is always zero, one or two complete UTF-8 sequences,
/// copied byte for byte from the name it was built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortLabel {
    buf: [u8; LABEL_CAPACITY],
    len: usize,
}

impl ShortLabel {
    /// The empty label.
    pub const EMPTY: Self = Self {
        buf: [0; LABEL_CAPACITY],
        len: 0,
    };

    /// The label as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `build_short_label` only copies byte ranges that `decode`
        // accepted as complete scalars, and `decode` accepts exactly the
        // sequences that are well-formed UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// The encoded bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The encoded bytes followed by the NUL terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Encoded length in bytes, at most `LABEL_CAPACITY - 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no valid character was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of characters in the label (0, 1 or 2).
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl Default for ShortLabel {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AsRef<str> for ShortLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for ShortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShortLabel").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ShortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShortLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Portion of a platform name before its first NUL byte.
fn until_nul(name: &[u8]) -> &[u8] {
    name.find_byte(0).map_or(name, |nul| &name[..nul])
}

/// Build the short label for a raw layout name.
///
/// Keeps the earliest two well-formed characters of `name`, copying their
/// original bytes. Ill-formed sequences are dropped and do not count towards
/// the two characters; an incomplete sequence ends the scan. A NUL byte ends
/// the name.
///
/// # Examples
///
/// ```rust
/// use xkbmon::build_short_label;
///
/// assert_eq!(build_short_label(b"English (US)").as_str(), "En");
/// assert_eq!(build_short_label(b"\xFFxy").as_str(), "xy");
/// assert_eq!(build_short_label("Русская".as_bytes()).as_str(), "Ру");
/// assert!(build_short_label(b"\xE2").is_empty());
/// ```
#[must_use]
pub fn build_short_label(name: &[u8]) -> ShortLabel {
    let mut label = ShortLabel::EMPTY;
    let mut cursor = 0;

    for (_, raw) in ValidScalars::new(until_nul(name)).take(MAX_LABEL_CHARS) {
        let end = cursor + raw.len();
        label.buf[cursor..end].copy_from_slice(raw);
        cursor = end;
    }

    label.buf[cursor] = 0;
    label.len = cursor;
    label
}

/// Render every well-formed character of a raw layout name.
///
/// Uses the same skipping rules as [`build_short_label`] without the length
/// limit; no replacement characters are inserted.
#[must_use]
pub fn full_name(name: &[u8]) -> String {
    ValidScalars::new(until_nul(name)).map(|(ch, _)| ch).collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii("ab", "ab")]
    #[case::long_ascii("English (US)", "En")]
    #[case::single("x", "x")]
    #[case::empty("", "")]
    #[case::cyrillic("Русская", "Ру")]
    #[case::four_byte("😀😁😂", "😀😁")]
    #[case::mixed_widths("a😀b", "a😀")]
    fn keeps_first_two_characters(#[case] name: &str, #[case] expected: &str) {
        let label = build_short_label(name.as_bytes());
        assert_eq!(label.as_str(), expected);
        assert_eq!(label.to_string(), expected);
    }

    #[test]
    fn invalid_leading_byte_is_skipped() {
        assert_eq!(build_short_label(&[0xFF, b'x', b'y']).as_str(), "xy");
    }

    #[test]
    fn garbage_between_characters_is_skipped() {
        let label = build_short_label(b"\x80\x80a\xC0\xAF\xED\xA0\x80\xE2\x82\xAC!");
        // `ED A0` is dropped as a unit, the trailing `80` on its own.
        assert_eq!(label.as_str(), "a€");
    }

    #[test]
    fn lone_lead_byte_gives_empty_label() {
        let label = build_short_label(&[0xE2]);
        assert!(label.is_empty());
        assert_eq!(label.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn incomplete_tail_stops_after_first_character() {
        let label = build_short_label(b"k\xF0\x9F\x98");
        assert_eq!(label.as_str(), "k");
        assert_eq!(label.char_count(), 1);
    }

    #[test]
    fn nul_ends_the_name() {
        assert_eq!(build_short_label(b"a\0bc").as_str(), "a");
        assert!(build_short_label(b"\0abc").is_empty());
        assert_eq!(full_name(b"us\0garbage"), "us");
        assert!(build_short_label(b"\xD0\0\xA0xy").is_empty());
    }

    #[test]
    fn maximal_label_fills_buffer() {
        let label = build_short_label("\u{10FFFF}\u{10000}tail".as_bytes());
        assert_eq!(label.len(), LABEL_CAPACITY - 1);
        assert_eq!(label.as_bytes_with_nul().len(), LABEL_CAPACITY);
        assert_eq!(label.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn bytes_are_copied_verbatim() {
        let name = "Ελληνικά".as_bytes();
        let label = build_short_label(name);
        assert_eq!(label.as_bytes(), &name[..4]);
    }

    #[test]
    fn full_name_skips_invalid_sequences() {
        assert_eq!(full_name(b"Deu\xFFtsch\xC3"), "Deutsch");
        assert_eq!(full_name("Français".as_bytes()), "Français");
        assert_eq!(full_name(b""), "");
    }

    #[test]
    fn debug_shows_text() {
        let label = build_short_label(b"us");
        assert_eq!(alloc::format!("{label:?}"), "ShortLabel(\"us\")");
        assert_eq!(ShortLabel::default(), ShortLabel::EMPTY);
    }
}
