//! Subspan - Composable Substring Pattern Matching
//!
//! This is a small engine for locating a single contiguous span inside a
//! string and deriving transformed strings from it. It provides:
//! - Primitive patterns: literal prefix/suffix, first/last occurrence,
//!   regex match and capture-group selection
//! - Declarative combinators: fallback ([`or`](PatternExt::or)),
//!   before/after projection, left/right extension
//! - A borrowed [`Span`] value type with zero-copy access to the text
//!   around the match
//! - Total `remove_from`/`replace_from` string operations (identity when
//!   nothing matches)
//! - A thread-local cache for regexes compiled from textual patterns
//!
//! ## Quick Start
//!
//! ```rust
//! use subspan::prelude::*;
//!
//! // Strip an "http://" or "https://" prefix if present
//! let stripped = prefix("http://")
//!     .or(prefix("https://"))
//!     .remove_from("https://example.com");
//! assert_eq!(stripped, "example.com");
//!
//! // Split "name:value" around the first colon
//! let colon = first(':').find_in("timeout:30").unwrap();
//! assert_eq!(colon.before(), "timeout");
//! assert_eq!(colon.after(), "30");
//! ```
//!
//! ## Using regex patterns
//!
//! ```rust
//! use subspan::prelude::*;
//!
//! // Select capture group 2 of the first find
//! let pattern = regex_group_str("f(o.)(ba.)", 2).unwrap();
//! let span = pattern.find_in("foobarbaz").unwrap();
//! assert_eq!(span.as_str(), "bar");
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable trace logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]

// Prelude module for convenient imports
pub mod prelude;

pub mod pattern;
pub mod regex_cache;
pub mod span;

/// Re-export commonly used types for convenience
pub use pattern::{
    // Constructor functions
    all,
    dynamic,
    first,
    last,
    none,
    prefix,
    regex,
    regex_group,
    regex_group_str,
    regex_str,
    suffix,
    // Pattern types
    All,
    Dynamic,
    First,
    Last,
    NoMatch,
    Or,
    Pattern,
    PatternExt,
    Prefix,
    Project,
    RegexGroup,
    Suffix,
};
pub use span::Span;
