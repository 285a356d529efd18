//! Interpretation of raw query-string filters.
//!
//! Query parameters arrive as optional strings. A missing parameter and an
//! empty one (`?type=`) both mean "no filter".

/// Normalise an optional filter value, treating `""` as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Interpret the `featured` project filter.
///
/// - absent or empty: `None` (no filter)
/// - `"true"` in any letter case: `Some(true)`
/// - any other value: `Some(false)`
pub fn parse_featured_flag(value: Option<&str>) -> Option<bool> {
    non_empty(value).map(|v| v.eq_ignore_ascii_case("true"))
}
