//! Pattern trait and combinators
//!
//! A [`Pattern`] locates at most one [`Span`] per input string. Primitive
//! patterns are built with the free constructor functions ([`prefix()`],
//! [`suffix()`], [`first()`], [`last()`], [`regex()`], ...); derived patterns are
//! built from existing ones with the combinator methods on
//! [`PatternExt`] ([`or`](PatternExt::or), [`before`](PatternExt::before),
//! [`and_after`](PatternExt::and_after), ...).
//!
//! # Example
//!
//! ```rust
//! use subspan::prelude::*;
//!
//! // Strip a scheme prefix, whichever one is present
//! let stripped = prefix("http://")
//!     .or(prefix("https://"))
//!     .remove_from("https://example.com");
//! assert_eq!(stripped, "example.com");
//!
//! // Strip a line comment along with everything after it
//! let code = first("//").and_after().remove_from("x += 1; // bump");
//! assert_eq!(code, "x += 1; ");
//! ```

use crate::regex_cache;
use crate::span::Span;
use memchr::memmem;
use regex::Regex;

#[cfg(not(feature = "logging"))]
macro_rules! match_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! match_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

// ============================================================================
// Pattern trait
// ============================================================================

/// A reusable matching capability producing at most one [`Span`] per input.
///
/// [`find_in`](Self::find_in) is the sole required method; every other
/// operation is provided in terms of it, so a new primitive pattern only
/// has to implement that one method.
///
/// Patterns are pure and stateless: matching is deterministic, keeps no
/// state across calls, and a `Pattern + Send + Sync` value can be shared
/// across threads with no locking.
pub trait Pattern {
    /// Finds the span matched in `haystack`, or `None` if this pattern
    /// does not match.
    ///
    /// The returned span borrows `haystack`, not the pattern, so it stays
    /// usable after the pattern is dropped.
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>>;

    /// Returns `haystack` with the matched span removed, or unchanged if
    /// this pattern does not match.
    fn remove_from(&self, haystack: &str) -> String {
        match self.find_in(haystack) {
            Some(span) => span.remove(),
            None => haystack.to_string(),
        }
    }

    /// Returns `haystack` with the matched span replaced by `replacement`,
    /// or unchanged if this pattern does not match.
    ///
    /// The replacement is inserted literally, with no special handling of
    /// backslash or dollar-sign characters even for regex patterns.
    fn replace_from(&self, haystack: &str, replacement: &str) -> String {
        match self.find_in(haystack) {
            Some(span) => span.replace_with(replacement),
            None => haystack.to_string(),
        }
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        (**self).find_in(haystack)
    }
}

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        (**self).find_in(haystack)
    }
}

// ============================================================================
// Extension trait for Pattern
// ============================================================================

/// Extension trait for [`Pattern`] with combinator builder methods.
pub trait PatternExt: Pattern + Sized {
    /// Fallback: try `self` first; only if it fails, try `other` on the
    /// same original input. `other` is never evaluated when `self`
    /// matches.
    fn or<Q: Pattern>(self, other: Q) -> Or<Self, Q> {
        Or {
            first: self,
            second: other,
        }
    }

    /// Matches with `self`, then covers the region strictly before the
    /// match (a span from the start of the input to the match start).
    fn before(self) -> Project<Self> {
        Project {
            inner: self,
            projection: Projection::Before,
        }
    }

    /// Matches with `self`, then covers the region strictly after the
    /// match (a span from the match end to the end of the input).
    fn after(self) -> Project<Self> {
        Project {
            inner: self,
            projection: Projection::After,
        }
    }

    /// Matches with `self`, then extends the match to the beginning of
    /// the input.
    fn and_before(self) -> Project<Self> {
        Project {
            inner: self,
            projection: Projection::AndBefore,
        }
    }

    /// Matches with `self`, then extends the match to the end of the
    /// input.
    fn and_after(self) -> Project<Self> {
        Project {
            inner: self,
            projection: Projection::AndAfter,
        }
    }
}

impl<P: Pattern + Sized> PatternExt for P {}

// ============================================================================
// Primitive patterns
// ============================================================================

/// Pattern that never matches. Built by [`none()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMatch;

impl Pattern for NoMatch {
    fn find_in<'s>(&self, _haystack: &'s str) -> Option<Span<'s>> {
        None
    }
}

/// Pattern matching every input entirely. Built by [`all()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct All;

impl Pattern for All {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        Some(Span::new(haystack, 0, haystack.len()))
    }
}

/// Literal prefix pattern. Built by [`prefix()`].
#[derive(Debug, Clone)]
pub struct Prefix(String);

impl Pattern for Prefix {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        haystack
            .starts_with(&self.0)
            .then(|| Span::new(haystack, 0, self.0.len()))
    }
}

/// Literal suffix pattern. Built by [`suffix()`].
#[derive(Debug, Clone)]
pub struct Suffix(String);

impl Pattern for Suffix {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        haystack
            .ends_with(&self.0)
            .then(|| Span::new(haystack, haystack.len() - self.0.len(), haystack.len()))
    }
}

/// First-occurrence pattern. Built by [`first()`].
#[derive(Debug, Clone)]
pub struct First(String);

impl Pattern for First {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        memmem::find(haystack.as_bytes(), self.0.as_bytes())
            .map(|start| Span::new(haystack, start, start + self.0.len()))
    }
}

/// Last-occurrence pattern. Built by [`last()`].
#[derive(Debug, Clone)]
pub struct Last(String);

impl Pattern for Last {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        memmem::rfind(haystack.as_bytes(), self.0.as_bytes())
            .map(|start| Span::new(haystack, start, start + self.0.len()))
    }
}

/// Regex pattern selecting one capture group of the first find. Built by
/// [`regex()`], [`regex_group()`] and the `*_str` variants.
#[derive(Debug, Clone)]
pub struct RegexGroup {
    regex: Regex,
    group: usize,
}

impl Pattern for RegexGroup {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        match_trace!("regex find: {:?} group {}", self.regex.as_str(), self.group);
        if self.group == 0 {
            // Group 0 is the whole match; skip the capture machinery.
            return self
                .regex
                .find(haystack)
                .map(|m| Span::new(haystack, m.start(), m.end()));
        }
        let caps = self.regex.captures(haystack)?;
        match caps.get(self.group) {
            Some(group_match) => Some(Span::new(haystack, group_match.start(), group_match.end())),
            None => panic!(
                "capture group {} not defined by this match of `{}` ({} groups)",
                self.group,
                self.regex.as_str(),
                caps.len()
            ),
        }
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// Fallback combinator. Built by [`PatternExt::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q> {
    first: P,
    second: Q,
}

impl<P: Pattern, Q: Pattern> Pattern for Or<P, Q> {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        self.first
            .find_in(haystack)
            .or_else(|| self.second.find_in(haystack))
    }
}

/// Pure span transform applied by [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Projection {
    Before,
    After,
    AndBefore,
    AndAfter,
}

impl Projection {
    fn apply(self, span: Span<'_>) -> Span<'_> {
        match self {
            Projection::Before => span.left(),
            Projection::After => span.right(),
            Projection::AndBefore => span.extend_left(),
            Projection::AndAfter => span.extend_right(),
        }
    }
}

/// Projection combinator shared by [`PatternExt::before`],
/// [`PatternExt::after`], [`PatternExt::and_before`] and
/// [`PatternExt::and_after`]: matches with the inner pattern, then maps
/// the resulting span. Absence propagates unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Project<P> {
    inner: P,
    projection: Projection,
}

impl<P: Pattern> Pattern for Project<P> {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        self.inner
            .find_in(haystack)
            .map(|span| self.projection.apply(span))
    }
}

/// A type-erased pattern (for heterogeneous compositions). Built by
/// [`dynamic()`].
pub struct Dynamic(Box<dyn Pattern + Send + Sync>);

impl Pattern for Dynamic {
    fn find_in<'s>(&self, haystack: &'s str) -> Option<Span<'s>> {
        self.0.find_in(haystack)
    }
}

/// Convert any pattern to a dynamic one.
///
/// Useful when patterns of different concrete types have to be stored
/// together, e.g. in a `Vec<Dynamic>` of fallback rules.
pub fn dynamic<P: Pattern + Send + Sync + 'static>(pattern: P) -> Dynamic {
    Dynamic(Box::new(pattern))
}

// ============================================================================
// Constructor functions
// ============================================================================

/// Returns a pattern that never matches any input.
pub fn none() -> NoMatch {
    NoMatch
}

/// Returns a pattern that matches every input entirely, including the
/// empty string (as a zero-length full match).
pub fn all() -> All {
    All
}

/// Returns a pattern matching inputs that start with `needle`.
///
/// Accepts a `&str`, `String` or `char`. An empty needle matches a
/// zero-length span at the start of any input.
pub fn prefix(needle: impl Into<String>) -> Prefix {
    Prefix(needle.into())
}

/// Returns a pattern matching inputs that end with `needle`.
///
/// Accepts a `&str`, `String` or `char`. An empty needle matches a
/// zero-length span at the end of any input.
pub fn suffix(needle: impl Into<String>) -> Suffix {
    Suffix(needle.into())
}

/// Returns a pattern matching the first (leftmost) occurrence of
/// `needle`.
///
/// Accepts a `&str`, `String` or `char`. An empty needle matches a
/// zero-length span at the start of any input.
pub fn first(needle: impl Into<String>) -> First {
    First(needle.into())
}

/// Returns a pattern matching the last (rightmost) occurrence of
/// `needle`.
///
/// Accepts a `&str`, `String` or `char`. An empty needle matches a
/// zero-length span at the end of any input. When the needle occurs only
/// once, [`first`] and [`last`] produce the identical span.
pub fn last(needle: impl Into<String>) -> Last {
    Last(needle.into())
}

/// Returns a pattern matching the first find of `regex` (the whole
/// match).
///
/// "Find" semantics apply, not full-match semantics: the expression is
/// searched for anywhere in the input, and anchors (`^`, `$`) inside it
/// behave per the regex engine's own anchoring rules.
///
/// Unlike `Regex::replace`, `regex(re).replace_from(s, replacement)`
/// treats the replacement as a literal string with no special handling of
/// backslash and dollar-sign characters.
pub fn regex(regex: Regex) -> RegexGroup {
    RegexGroup { regex, group: 0 }
}

/// Returns a pattern selecting capture `group` of the first find of
/// `regex`. Group 0 is the whole match.
///
/// # Panics
///
/// The returned pattern's [`find_in`](Pattern::find_in) panics when the
/// expression matches overall but does not define capture group `group`
/// for that particular match, either because the index is beyond the
/// expression's group count or because the group lies in an alternation
/// branch that did not participate. The panic is raised per invocation
/// and does not invalidate the pattern for other inputs.
pub fn regex_group(regex: Regex, group: usize) -> RegexGroup {
    RegexGroup { regex, group }
}

/// Compiles `pattern` and returns a pattern matching its first find (the
/// whole match).
///
/// Compilation goes through a thread-local cache (see
/// [`regex_cache`](crate::regex_cache)), so repeated construction from
/// the same textual pattern does not recompile it. Compilation failure is
/// reported to the caller.
pub fn regex_str(pattern: &str) -> Result<RegexGroup, regex::Error> {
    regex_group_str(pattern, 0)
}

/// Compiles `pattern` and returns a pattern selecting capture `group` of
/// its first find.
///
/// Compilation goes through the thread-local cache like [`regex_str`].
/// The returned pattern panics at match time like [`regex_group`]'s.
pub fn regex_group_str(pattern: &str, group: usize) -> Result<RegexGroup, regex::Error> {
    Ok(RegexGroup {
        regex: regex_cache::get_or_compile(pattern)?,
        group,
    })
}
