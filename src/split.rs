//! Zero-copy line / token splitter.
//!
//! [`Split`] walks a borrowed `&'src str` and yields the segments between
//! successive occurrences of a single-byte [`Delimiter`].  Every yielded
//! segment is a fresh `&'src str` view into the source buffer.  Nothing is
//! copied, and a segment stays valid after the splitter advances.
//!
//! The same type splits a whole file into lines and a single line into
//! space-separated tokens:
//!
//! ```
//! use crane::split::{Delimiter, Split};
//!
//! let mut lines = Split::lines("move 3 from 2 to 1\nmove 1 from 1 to 2\n");
//! let first = lines.next().unwrap();
//! let tokens: Vec<&str> = Split::new(first, Delimiter::SPACE).collect();
//! assert_eq!(tokens, ["move", "3", "from", "2", "to", "1"]);
//! ```
//!
//! Edge behaviour:
//! - an empty buffer yields nothing;
//! - a buffer without the delimiter yields exactly one segment (itself);
//! - consecutive delimiters yield empty segments between them;
//! - a trailing delimiter does **not** yield a final empty segment.

use std::iter::FusedIterator;

// ── Delimiter ─────────────────────────────────────────────────────────────────

/// A single ASCII byte to split on.
///
/// Restricting delimiters to ASCII guarantees that every split point falls on
/// a UTF-8 character boundary, so segments can be handed out as `&str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const NEWLINE: Delimiter = Delimiter(b'\n');
    pub const SPACE: Delimiter = Delimiter(b' ');

    /// Returns `None` for non-ASCII bytes.
    pub const fn new(byte: u8) -> Option<Self> {
        if byte.is_ascii() {
            Some(Delimiter(byte))
        } else {
            None
        }
    }

    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::NEWLINE
    }
}

// ── Split ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Split<'src> {
    src: &'src str,
    delimiter: Delimiter,
    /// Byte offset of the start of the next segment.
    pos: usize,
}

impl<'src> Split<'src> {
    pub fn new(src: &'src str, delimiter: Delimiter) -> Self {
        Self {
            src,
            delimiter,
            pos: 0,
        }
    }

    /// Split on `\n`.  A `\r` before the newline is left in the segment.
    pub fn lines(src: &'src str) -> Self {
        Self::new(src, Delimiter::NEWLINE)
    }

    /// Split on single spaces.
    pub fn tokens(src: &'src str) -> Self {
        Self::new(src, Delimiter::SPACE)
    }

    /// Byte offset of the cursor within the source buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The part of the buffer not yet handed out.
    pub fn remainder(&self) -> &'src str {
        &self.src[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Return the next segment and move the cursor past its delimiter, or
    /// `None` once the buffer is exhausted.
    pub fn advance(&mut self) -> Option<&'src str> {
        if self.is_exhausted() {
            return None;
        }
        let start = self.pos;
        let rest = &self.src.as_bytes()[start..];
        match memchr::memchr(self.delimiter.byte(), rest) {
            Some(len) => {
                self.pos = start + len + 1;
                Some(&self.src[start..start + len])
            }
            None => {
                self.pos = self.src.len();
                Some(&self.src[start..])
            }
        }
    }
}

impl<'src> Iterator for Split<'src> {
    type Item = &'src str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.src.len() - self.pos;
        if remaining == 0 {
            (0, Some(0))
        } else {
            (1, Some(remaining))
        }
    }
}

impl FusedIterator for Split<'_> {}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    fn collect(src: &str, delim: u8) -> Vec<&str> {
        Split::new(src, Delimiter::new(delim).unwrap()).collect()
    }

    /// Rebuild the buffer from its segments; the trailing delimiter is the
    /// only byte not represented by a separator between segments.
    fn rejoin(src: &str, delim: u8) -> String {
        let d = (delim as char).to_string();
        let mut out = collect(src, delim).join(&d);
        if src.as_bytes().last() == Some(&delim) {
            out.push_str(&d);
        }
        out
    }

    #[test]
    fn test_empty_buffer_yields_nothing() {
        assert!(collect("", b'\n').is_empty());
    }

    #[test]
    fn test_no_delimiter_yields_whole_buffer() {
        assert_eq!(collect("[Z] [M] [P]", b'\n'), ["[Z] [M] [P]"]);
    }

    #[test]
    fn test_trailing_delimiter_has_no_empty_tail() {
        assert_eq!(collect("a\nb\n", b'\n'), ["a", "b"]);
    }

    #[test]
    fn test_unterminated_tail_is_yielded() {
        assert_eq!(collect("a\nb", b'\n'), ["a", "b"]);
    }

    #[test]
    fn test_consecutive_delimiters_yield_empty_segments() {
        assert_eq!(collect("a\n\nb", b'\n'), ["a", "", "b"]);
        assert_eq!(collect("\n", b'\n'), [""]);
        assert_eq!(collect("\n\n", b'\n'), ["", ""]);
    }

    #[test]
    fn test_lossless_round_trip() {
        for src in [
            "a\nb\nc",
            "a\nb\nc\n",
            "\nleading",
            "x\n\n\ny\n",
            "    [D]    \n[N] [C]    \n 1   2 \n\nmove 1 from 2 to 1\n",
        ] {
            assert_eq!(rejoin(src, b'\n'), src, "round trip failed for {src:?}");
        }
        assert_eq!(rejoin("move  3 from", b' '), "move  3 from");
    }

    /// Map raw bytes onto printable ASCII plus `\n`, with roughly one byte in
    /// four replaced by `delim` so splits actually happen.
    fn ascii_buffer(raw: &[u8], delim: u8) -> String {
        raw.iter()
            .map(|&b| match b % 4 {
                0 => delim,
                1 => b'\n',
                _ => b' ' + b % 95,
            })
            .map(char::from)
            .collect()
    }

    #[test]
    fn test_round_trip_any_ascii_buffer() {
        fn prop(raw: Vec<u8>, delim: u8) -> bool {
            let delim = delim % 128;
            let src = ascii_buffer(&raw, delim);
            let segments = collect(&src, delim);

            let expected = if src.is_empty() {
                0
            } else {
                let delims = src.bytes().filter(|&b| b == delim).count();
                delims + usize::from(src.as_bytes().last() != Some(&delim))
            };
            let borrowed = segments.iter().all(|seg| {
                (seg.as_ptr() as usize)
                    .checked_sub(src.as_ptr() as usize)
                    .is_some_and(|start| start + seg.len() <= src.len())
                    && !seg.as_bytes().contains(&delim)
            });

            rejoin(&src, delim) == src && segments.len() == expected && borrowed
        }

        QuickCheck::new()
            .tests(1_000)
            .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
    }

    #[test]
    fn test_buffer_without_delimiter_is_one_segment() {
        fn prop(raw: Vec<u8>, delim: u8) -> bool {
            let delim = delim % 128;
            let src: String = ascii_buffer(&raw, delim)
                .chars()
                .filter(|&c| c != char::from(delim))
                .collect();
            if src.is_empty() {
                return collect(&src, delim).is_empty();
            }
            collect(&src, delim) == [src.as_str()]
        }

        QuickCheck::new()
            .tests(1_000)
            .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
    }

    #[test]
    fn test_move_line_tokens() {
        let tokens: Vec<&str> = Split::tokens("move 3 from 2 to 1").collect();
        assert_eq!(tokens, ["move", "3", "from", "2", "to", "1"]);
    }

    #[test]
    fn test_nested_split_over_sub_slice() {
        let src = "move 1 from 2 to 1\nmove 3 from 1 to 3\n";
        let nested: Vec<Vec<&str>> = Split::lines(src)
            .map(|line| Split::tokens(line).collect())
            .collect();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[1][1], "3");
        assert_eq!(nested[1][5], "3");
    }

    #[test]
    fn test_segments_outlive_advance() {
        let src = String::from("one\ntwo\nthree");
        let mut split = Split::lines(&src);
        let first = split.advance().unwrap();
        let second = split.advance().unwrap();
        assert_eq!((first, second), ("one", "two"));
        // Segments point into the source buffer.
        assert_eq!(first.as_ptr(), src.as_ptr());
    }

    #[test]
    fn test_offset_and_remainder_track_cursor() {
        let mut split = Split::lines("ab\ncd\nef");
        assert_eq!(split.offset(), 0);
        split.advance();
        assert_eq!(split.offset(), 3);
        assert_eq!(split.remainder(), "cd\nef");
        split.advance();
        split.advance();
        assert!(split.is_exhausted());
        assert_eq!(split.remainder(), "");
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut split = Split::lines("a");
        assert_eq!(split.next(), Some("a"));
        assert_eq!(split.next(), None);
        assert_eq!(split.next(), None);
    }

    #[test]
    fn test_multibyte_content_is_preserved() {
        assert_eq!(collect("é\nü", b'\n'), ["é", "ü"]);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(Delimiter::new(0xC3).is_none());
        assert_eq!(Delimiter::new(b',').map(Delimiter::byte), Some(b','));
        assert_eq!(Delimiter::default(), Delimiter::NEWLINE);
    }

    #[test]
    fn test_size_hint_bounds() {
        let split = Split::lines("a\nb");
        let (lo, hi) = split.size_hint();
        assert_eq!(lo, 1);
        assert!(hi.unwrap() >= 2);
        assert_eq!(Split::lines("").size_hint(), (0, Some(0)));
    }
}
