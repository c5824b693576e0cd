//! Strict, resynchronizing UTF-8 decoder.
//!
//! `decode` looks at the front of a byte slice and classifies it as one of:
//! - a complete scalar value together with the number of bytes it occupies,
//! - `Incomplete`: the slice ends in the middle of a sequence (or is empty),
//! - `Invalid`: the bytes are ill-formed, with a skip count that lets the
//!   caller drop exactly the bytes up to and including the first offending
//!   one.
//!
//! Well-formedness follows Unicode Table 3-7. Lead bytes `C0`, `C1` and
//! `F5..=FF` never start a sequence, and a handful of lead bytes narrow the
//! range of their *first* continuation byte:
//!
//! | lead        | 1st          | 2nd          | 3rd          |
//! |-------------|--------------|--------------|--------------|
//! | `C2..=DF`   | `80..=BF`    |              |              |
//! | `E0`        | `A0..=BF`    | `80..=BF`    |              |
//! | `E1..=EC`   | `80..=BF`    | `80..=BF`    |              |
//! | `ED`        | `80..=9F`    | `80..=BF`    |              |
//! | `EE..=EF`   | `80..=BF`    | `80..=BF`    |              |
//! | `F0`        | `90..=BF`    | `80..=BF`    | `80..=BF`    |
//! | `F1..=F3`   | `80..=BF`    | `80..=BF`    | `80..=BF`    |
//! | `F4`        | `80..=8F`    | `80..=BF`    | `80..=BF`    |
//!
//! The narrowed ranges exclude overlong forms (`E0`, `F0`), surrogates (`ED`)
//! and values above U+10FFFF (`F4`). They are spelled out row by row in
//! `LEAD_BYTES` rather than derived from bit widths.

use core::iter::FusedIterator;

/// Longest UTF-8 encoding of a single scalar value.
pub const MAX_UTF8_LEN: usize = 4;

/// Result of decoding the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed scalar value occupying the first `len` bytes (1–4).
    Scalar {
        /// The decoded scalar value.
        ch: char,
        /// Number of bytes the encoding occupies.
        len: u8,
    },
    /// The slice ends before the sequence does. Nothing was consumed.
    Incomplete,
    /// The slice starts with an ill-formed sequence.
    Invalid {
        /// Bytes to drop before decoding again; always at least 1.
        skip: usize,
    },
}

/// One row of the lead byte table.
#[derive(Debug, Clone, Copy)]
struct LeadByte {
    /// Payload bits of the lead byte, already shifted into place.
    high_bits: u32,
    /// Number of continuation bytes that follow (1, 2 or 3).
    continuations: u8,
    /// Inclusive legal range for each continuation position.
    ranges: [(u8, u8); 3],
}

const fn lead(high_bits: u32, continuations: u8, ranges: [(u8, u8); 3]) -> LeadByte {
    LeadByte {
        high_bits,
        continuations,
        ranges,
    }
}

const FIRST_LEAD: u8 = 0xC2;

const ANY: (u8, u8) = (0x80, 0xBF);

/// Lead bytes `C2..=F4`, indexed by `lead - 0xC2`.
///
/// Ranges past `continuations` are never consulted.
static LEAD_BYTES: [LeadByte; 51] = [
    lead(0x00_0080, 1, [ANY, ANY, ANY]),          // C2
    lead(0x00_00C0, 1, [ANY, ANY, ANY]),          // C3
    lead(0x00_0100, 1, [ANY, ANY, ANY]),          // C4
    lead(0x00_0140, 1, [ANY, ANY, ANY]),          // C5
    lead(0x00_0180, 1, [ANY, ANY, ANY]),          // C6
    lead(0x00_01C0, 1, [ANY, ANY, ANY]),          // C7
    lead(0x00_0200, 1, [ANY, ANY, ANY]),          // C8
    lead(0x00_0240, 1, [ANY, ANY, ANY]),          // C9
    lead(0x00_0280, 1, [ANY, ANY, ANY]),          // CA
    lead(0x00_02C0, 1, [ANY, ANY, ANY]),          // CB
    lead(0x00_0300, 1, [ANY, ANY, ANY]),          // CC
    lead(0x00_0340, 1, [ANY, ANY, ANY]),          // CD
    lead(0x00_0380, 1, [ANY, ANY, ANY]),          // CE
    lead(0x00_03C0, 1, [ANY, ANY, ANY]),          // CF
    lead(0x00_0400, 1, [ANY, ANY, ANY]),          // D0
    lead(0x00_0440, 1, [ANY, ANY, ANY]),          // D1
    lead(0x00_0480, 1, [ANY, ANY, ANY]),          // D2
    lead(0x00_04C0, 1, [ANY, ANY, ANY]),          // D3
    lead(0x00_0500, 1, [ANY, ANY, ANY]),          // D4
    lead(0x00_0540, 1, [ANY, ANY, ANY]),          // D5
    lead(0x00_0580, 1, [ANY, ANY, ANY]),          // D6
    lead(0x00_05C0, 1, [ANY, ANY, ANY]),          // D7
    lead(0x00_0600, 1, [ANY, ANY, ANY]),          // D8
    lead(0x00_0640, 1, [ANY, ANY, ANY]),          // D9
    lead(0x00_0680, 1, [ANY, ANY, ANY]),          // DA
    lead(0x00_06C0, 1, [ANY, ANY, ANY]),          // DB
    lead(0x00_0700, 1, [ANY, ANY, ANY]),          // DC
    lead(0x00_0740, 1, [ANY, ANY, ANY]),          // DD
    lead(0x00_0780, 1, [ANY, ANY, ANY]),          // DE
    lead(0x00_07C0, 1, [ANY, ANY, ANY]),          // DF
    lead(0x00_0000, 2, [(0xA0, 0xBF), ANY, ANY]), // E0
    lead(0x00_1000, 2, [ANY, ANY, ANY]),          // E1
    lead(0x00_2000, 2, [ANY, ANY, ANY]),          // E2
    lead(0x00_3000, 2, [ANY, ANY, ANY]),          // E3
    lead(0x00_4000, 2, [ANY, ANY, ANY]),          // E4
    lead(0x00_5000, 2, [ANY, ANY, ANY]),          // E5
    lead(0x00_6000, 2, [ANY, ANY, ANY]),          // E6
    lead(0x00_7000, 2, [ANY, ANY, ANY]),          // E7
    lead(0x00_8000, 2, [ANY, ANY, ANY]),          // E8
    lead(0x00_9000, 2, [ANY, ANY, ANY]),          // E9
    lead(0x00_A000, 2, [ANY, ANY, ANY]),          // EA
    lead(0x00_B000, 2, [ANY, ANY, ANY]),          // EB
    lead(0x00_C000, 2, [ANY, ANY, ANY]),          // EC
    lead(0x00_D000, 2, [(0x80, 0x9F), ANY, ANY]), // ED
    lead(0x00_E000, 2, [ANY, ANY, ANY]),          // EE
    lead(0x00_F000, 2, [ANY, ANY, ANY]),          // EF
    lead(0x00_0000, 3, [(0x90, 0xBF), ANY, ANY]), // F0
    lead(0x04_0000, 3, [ANY, ANY, ANY]),          // F1
    lead(0x08_0000, 3, [ANY, ANY, ANY]),          // F2
    lead(0x0C_0000, 3, [ANY, ANY, ANY]),          // F3
    lead(0x10_0000, 3, [(0x80, 0x8F), ANY, ANY]), // F4
];

/// Decode the scalar value at the front of `bytes`.
///
/// # Examples
///
/// ```rust
/// use xkbmon::{Decoded, decode};
///
/// assert_eq!(decode("é".as_bytes()), Decoded::Scalar { ch: 'é', len: 2 });
/// assert_eq!(decode(b"\xC3"), Decoded::Incomplete);
/// assert_eq!(decode(b"\xC3A"), Decoded::Invalid { skip: 2 });
/// assert_eq!(decode(b"\xFFA"), Decoded::Invalid { skip: 1 });
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> Decoded {
    let Some((&first, rest)) = bytes.split_first() else {
        return Decoded::Incomplete;
    };

    if first.is_ascii() {
        return Decoded::Scalar {
            ch: char::from(first),
            len: 1,
        };
    }

    let Some(entry) = first
        .checked_sub(FIRST_LEAD)
        .and_then(|offset| LEAD_BYTES.get(usize::from(offset)))
    else {
        return Decoded::Invalid { skip: 1 };
    };

    let expected = entry.continuations;
    let mut value = entry.high_bits;
    let mut shift = 6 * u32::from(expected);

    for (position, (&byte, &(lo, hi))) in rest
        .iter()
        .zip(&entry.ranges)
        .take(usize::from(expected))
        .enumerate()
    {
        if !(lo..=hi).contains(&byte) {
            // `position` counts continuations; the lead byte sits before them.
            return Decoded::Invalid { skip: position + 2 };
        }

        shift -= 6;
        value |= u32::from(byte & 0x3F) << shift;

        if shift == 0 {
            let len = expected + 1;
            // The table never admits surrogates or values past U+10FFFF.
            return char::from_u32(value).map_or(
                Decoded::Invalid {
                    skip: usize::from(len),
                },
                |ch| Decoded::Scalar { ch, len },
            );
        }
    }

    Decoded::Incomplete
}

/// Iterator over the well-formed scalar values of a byte string.
///
/// Yields each scalar together with the raw bytes it was decoded from. Invalid
/// sequences are dropped using the skip count reported by [`decode`]; an
/// incomplete sequence ends the iteration.
#[derive(Debug, Clone)]
pub struct ValidScalars<'a> {
    rest: &'a [u8],
}

impl<'a> ValidScalars<'a> {
    /// Iterate over the valid scalars of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }

    /// The bytes not yet examined.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for ValidScalars<'a> {
    type Item = (char, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match decode(self.rest) {
                Decoded::Scalar { ch, len } => {
                    let (raw, rest) = self.rest.split_at(usize::from(len));
                    self.rest = rest;
                    return Some((ch, raw));
                }
                Decoded::Invalid { skip } => {
                    self.rest = self.rest.get(skip..).unwrap_or_default();
                }
                Decoded::Incomplete => {
                    self.rest = &[];
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for ValidScalars<'_> {}
