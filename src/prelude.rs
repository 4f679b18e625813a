//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from
//! subspan. Importing this module with a wildcard import brings the core
//! types into scope:
//!
//! ```
//! use subspan::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Core Types
//! - [`Span`] - A matched region inside a specific string
//! - [`Pattern`] - Trait for matching capabilities
//! - [`PatternExt`] - Extension trait with combinator methods
//!
//! ## Pattern Constructors
//! - [`none()`] - Never matches
//! - [`all()`] - Matches the entire input
//! - [`prefix()`] - Literal prefix
//! - [`suffix()`] - Literal suffix
//! - [`first()`] - First (leftmost) occurrence
//! - [`last()`] - Last (rightmost) occurrence
//! - [`regex()`] / [`regex_str()`] - Regex find
//! - [`regex_group()`] / [`regex_group_str()`] - Regex capture group
//! - [`dynamic()`] - Type-erased pattern

// ============================================================================
// Core Types
// ============================================================================

pub use crate::pattern::{Pattern, PatternExt};
pub use crate::span::Span;

// ============================================================================
// Pattern Constructors
// ============================================================================

pub use crate::pattern::{
    all, dynamic, first, last, none, prefix, regex, regex_group, regex_group_str, regex_str,
    suffix,
};
