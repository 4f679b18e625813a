//! Matched span value type
//!
//! A [`Span`] is an immutable view of one contiguous region inside one
//! specific string: the string it was matched against plus start/end byte
//! offsets. Spans are only ever produced by a successful pattern match (or
//! derived from another span) and support building transformed strings
//! (removal, replacement) without re-scanning the source.

use std::fmt;

/// A contiguous matched region inside a specific source string.
///
/// The span borrows the string it was matched against, so the borrow
/// checker guarantees it can never outlive that string. Deriving a new
/// span from an existing one reuses the same source reference; only the
/// offsets move. Offsets are byte offsets and always lie on UTF-8
/// character boundaries.
///
/// Two spans are equal when their source strings are equal and their
/// offsets are identical. Spans have no ordering.
///
/// # Example
///
/// ```rust
/// use subspan::prelude::*;
///
/// let span = first("bar").find_in("foobarbaz").unwrap();
/// assert_eq!(span.as_str(), "bar");
/// assert_eq!(span.before(), "foo");
/// assert_eq!(span.after(), "baz");
/// assert_eq!(span.remove(), "foobaz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'s> {
    /// The string this span was matched against
    source: &'s str,
    /// Start byte offset (inclusive)
    start: usize,
    /// End byte offset (exclusive)
    end: usize,
}

impl<'s> Span<'s> {
    /// Create a span over `source`. Offsets must be in bounds and ordered.
    pub(crate) fn new(source: &'s str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.len());
        debug_assert!(source.is_char_boundary(start) && source.is_char_boundary(end));
        Self { source, start, end }
    }

    /// Part of the source string before this span.
    pub fn before(&self) -> &'s str {
        &self.source[..self.start]
    }

    /// Part of the source string after this span.
    pub fn after(&self) -> &'s str {
        &self.source[self.end..]
    }

    /// Returns the source string with this span removed.
    pub fn remove(&self) -> String {
        // The concatenation at the end is always correct; the first two
        // arms only skip concatenating a known-empty side.
        if self.end == self.source.len() {
            self.before().to_string()
        } else if self.start == 0 {
            self.after().to_string()
        } else {
            let mut removed = String::with_capacity(self.source.len() - self.len());
            removed.push_str(self.before());
            removed.push_str(self.after());
            removed
        }
    }

    /// Returns the source string with this span replaced by `replacement`.
    ///
    /// The replacement is inserted literally; backslash and dollar-sign
    /// characters get no special handling, even for spans produced by a
    /// regex pattern.
    pub fn replace_with(&self, replacement: &str) -> String {
        let mut replaced =
            String::with_capacity(self.source.len() - self.len() + replacement.len());
        replaced.push_str(self.before());
        replaced.push_str(replacement);
        replaced.push_str(self.after());
        replaced
    }

    /// Like [`replace_with`](Self::replace_with), for a single character.
    pub fn replace_with_char(&self, replacement: char) -> String {
        let mut buf = [0u8; 4];
        self.replace_with(replacement.encode_utf8(&mut buf))
    }

    /// Starting byte offset of this span in the source string.
    pub fn index(&self) -> usize {
        self.start
    }

    /// Length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this span is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text itself.
    pub fn as_str(&self) -> &'s str {
        &self.source[self.start..self.end]
    }

    /// Span covering the part of the source before this one.
    pub(crate) fn left(self) -> Self {
        Self::new(self.source, 0, self.start)
    }

    /// Span covering the part of the source after this one.
    pub(crate) fn right(self) -> Self {
        Self::new(self.source, self.end, self.source.len())
    }

    /// This span extended to the beginning of the source.
    pub(crate) fn extend_left(self) -> Self {
        Self::new(self.source, 0, self.end)
    }

    /// This span extended to the end of the source.
    pub(crate) fn extend_right(self) -> Self {
        Self::new(self.source, self.start, self.source.len())
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let span = Span::new("foobarbaz", 3, 6);
        assert_eq!(span.as_str(), "bar");
        assert_eq!(span.before(), "foo");
        assert_eq!(span.after(), "baz");
        assert_eq!(span.index(), 3);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "bar");
    }

    #[test]
    fn test_partition_reassembles_source() {
        let source = "foobarbaz";
        let span = Span::new(source, 3, 6);
        let rebuilt = format!("{}{}{}", span.before(), span.as_str(), span.after());
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_remove_middle() {
        assert_eq!(Span::new("foobarbaz", 3, 6).remove(), "foobaz");
    }

    #[test]
    fn test_remove_at_start() {
        assert_eq!(Span::new("foobar", 0, 3).remove(), "bar");
    }

    #[test]
    fn test_remove_at_end() {
        assert_eq!(Span::new("foobar", 3, 6).remove(), "foo");
    }

    #[test]
    fn test_remove_whole_string() {
        assert_eq!(Span::new("foo", 0, 3).remove(), "");
    }

    #[test]
    fn test_replace_with() {
        let span = Span::new("foobarbaz", 3, 6);
        assert_eq!(span.replace_with("car"), "foocarbaz");
        assert_eq!(span.replace_with(""), "foobaz");
        assert_eq!(span.replace_with_char('c'), "foocbaz");
    }

    #[test]
    fn test_empty_span() {
        let span = Span::new("foo", 3, 3);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.as_str(), "");
        assert_eq!(span.before(), "foo");
        assert_eq!(span.after(), "");
        assert_eq!(span.remove(), "foo");
        assert_eq!(span.replace_with("bar"), "foobar");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = String::from("foobar");
        let b = String::from("foobar");
        assert_eq!(Span::new(&a, 0, 3), Span::new(&b, 0, 3));
        assert_ne!(Span::new(&a, 0, 3), Span::new(&a, 3, 6));
        assert_ne!(Span::new(&a, 0, 3), Span::new("xxxbar", 0, 3));
    }

    #[test]
    fn test_derivations_share_source() {
        let span = Span::new("foobarbaz", 3, 6);

        let left = span.left();
        assert_eq!((left.index(), left.len()), (0, 3));
        assert_eq!(left.as_str(), "foo");

        let right = span.right();
        assert_eq!((right.index(), right.len()), (6, 3));
        assert_eq!(right.as_str(), "baz");

        let extended_left = span.extend_left();
        assert_eq!((extended_left.index(), extended_left.len()), (0, 6));

        let extended_right = span.extend_right();
        assert_eq!((extended_right.index(), extended_right.len()), (3, 6));
    }

    #[test]
    fn test_unicode_offsets_are_bytes() {
        let span = Span::new("héllo", 0, 3);
        assert_eq!(span.as_str(), "hé");
        assert_eq!(span.after(), "llo");
    }
}
