//! Glob-style matching for cache keys.
//!
//! Only the `*` wildcard is supported; it matches any sequence of characters,
//! including the empty one.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use gobarber_core::cache::pattern_matches;
///
/// assert!(pattern_matches("providers-list:*", "providers-list:42"));
/// assert!(pattern_matches("provider-appointments:*:2020-5-20", "provider-appointments:1:2020-5-20"));
/// assert!(!pattern_matches("providers-list:*", "provider-appointments:1:2020-5-20"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');

    // `split` always yields at least one item
    let head = segments.next().unwrap_or_default();
    let Some(mut remaining) = key.strip_prefix(head) else {
        return false;
    };

    let rest: Vec<&str> = segments.collect();
    let Some((tail, middle)) = rest.split_last() else {
        // No wildcard at all
        return remaining.is_empty();
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    remaining.ends_with(tail)
}
