//! Single-codepoint UTF-8 decoding.
//!
//! Layout walks raw bytes one codepoint at a time so it can stop cleanly at
//! the first malformed sequence instead of rejecting the whole string.

/// Decode the first Unicode scalar value in `bytes`.
///
/// Returns the value and the number of bytes it occupies, or `None` when the
/// input is empty or starts with a truncated, overlong, surrogate or
/// out-of-range sequence.
///
/// ```
/// use nxgfx_text::decode_utf8;
///
/// assert_eq!(decode_utf8("é!".as_bytes()), Some(('é', 2)));
/// assert_eq!(decode_utf8(&[0xC0, 0x80]), None);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let len = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let sequence = bytes.get(..len)?;
    let ch = std::str::from_utf8(sequence).ok()?.chars().next()?;
    Some((ch, len))
}
