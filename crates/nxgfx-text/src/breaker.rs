//! Break opportunities for greedy line wrapping.

use nxgfx_core::alloc::HashSet;

use crate::decode::decode_utf8;

/// Codepoints after which a line may wrap.
#[derive(Debug, Clone, Default)]
pub struct BreakPointSet {
    points: HashSet<char>,
}

impl BreakPointSet {
    /// Break characters used when nothing else is configured.
    pub const DEFAULTS: [char; 7] = [' ', '\u{3000}', '/', '_', '-', '\u{3002}', '\u{3001}'];

    /// An empty set. Every run is then a single unbreakable word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Space, ideographic space, `/`, `_`, `-`, `。` and `、`.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.extend(Self::DEFAULTS);
        set
    }

    /// Returns `false` when `ch` was already present.
    pub fn add(&mut self, ch: char) -> bool {
        self.points.insert(ch)
    }

    pub fn extend(&mut self, chars: impl IntoIterator<Item = char>) {
        self.points.extend(chars);
    }

    pub fn contains(&self, ch: char) -> bool {
        self.points.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Byte offset just past the first break character in `text`.
    ///
    /// The break character belongs to the word before it. Returns
    /// `text.len()` when no break character is found, including when a
    /// malformed sequence ends the scan early.
    pub fn next_break(&self, text: &[u8]) -> usize {
        let mut offset = 0;
        while let Some((ch, len)) = decode_utf8(&text[offset..]) {
            offset += len;
            if self.contains(ch) {
                return offset;
            }
        }
        text.len()
    }
}

impl FromIterator<char> for BreakPointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_after_space() {
        let set = BreakPointSet::with_defaults();
        assert_eq!(set.next_break(b"word rest"), 5);
    }

    #[test]
    fn test_every_default_breaks() {
        let set = BreakPointSet::with_defaults();
        for point in BreakPointSet::DEFAULTS {
            let text = format!("word{point} rest");
            assert_eq!(set.next_break(text.as_bytes()), 4 + point.len_utf8(), "{point:?}");
        }
    }

    #[test]
    fn test_no_break_returns_length() {
        let set = BreakPointSet::with_defaults();
        assert_eq!(set.next_break(b"unbreakable"), 11);
        assert_eq!(set.next_break(b""), 0);
    }

    #[test]
    fn test_empty_set_never_breaks() {
        let set = BreakPointSet::new();
        assert_eq!(set.next_break(b"a b c"), 5);
    }

    #[test]
    fn test_malformed_input_returns_length() {
        let set = BreakPointSet::with_defaults();
        assert_eq!(set.next_break(b"ab\xFFcd ef"), 8);
    }

    #[test]
    fn test_added_point() {
        let mut set = BreakPointSet::new();
        assert!(set.add(','));
        assert!(!set.add(','));
        assert_eq!(set.next_break("一,二".as_bytes()), 4);
    }

    #[test]
    fn test_multibyte_break() {
        let set = BreakPointSet::with_defaults();
        assert_eq!(set.next_break("日本。語".as_bytes()), 9);
    }
}
