//! Thread-local regex cache for pattern compilation
//!
//! Compiled expressions are cached so that building a pattern from the
//! same textual regex repeatedly does not recompile it. Uses thread-local
//! storage for safe concurrent access.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    /// Thread-local cache of compiled regex patterns
    static REGEX_CACHE: RefCell<HashMap<String, Regex>> = RefCell::new(HashMap::new());
}

/// Get or compile a regex pattern.
///
/// Successful compilations are cached per thread and cloned out on later
/// hits (`Regex` clones share the compiled program). A compilation
/// failure is reported to the caller and nothing is cached.
///
/// # Arguments
/// * `pattern` - The regex pattern string
///
/// # Returns
/// * `Ok(Regex)` if the pattern is valid
/// * `Err(regex::Error)` if the pattern is invalid
pub fn get_or_compile(pattern: &str) -> Result<Regex, regex::Error> {
    REGEX_CACHE.with(|cache| {
        // Check if already compiled
        if let Some(regex) = cache.borrow().get(pattern) {
            return Ok(regex.clone());
        }

        // Compile and cache
        let regex = Regex::new(pattern)?;
        cache
            .borrow_mut()
            .insert(pattern.to_string(), regex.clone());
        Ok(regex)
    })
}

/// Clear the regex cache
///
/// Call this to free memory if many unique patterns have been compiled.
pub fn clear_cache() {
    REGEX_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get the number of cached patterns
pub fn cache_size() -> usize {
    REGEX_CACHE.with(|cache| cache.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_compilation() {
        clear_cache();

        // First access compiles
        assert!(get_or_compile("[0-9]+").is_ok());
        assert_eq!(cache_size(), 1);

        // Second access uses cache
        assert!(get_or_compile("[0-9]+").is_ok());
        assert_eq!(cache_size(), 1);

        // Different pattern adds to cache
        assert!(get_or_compile("[a-z]+").is_ok());
        assert_eq!(cache_size(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_reported_not_cached() {
        clear_cache();

        assert!(get_or_compile("[invalid").is_err());
        assert_eq!(cache_size(), 0);
    }

    #[test]
    fn test_find_semantics() {
        clear_cache();

        let regex = get_or_compile("[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
        let found = regex.find("hello_world123 rest").unwrap();
        assert_eq!(found.start(), 0);
        assert_eq!(found.end(), 14);
        assert_eq!(found.as_str(), "hello_world123");
    }
}
