//! String parsing utilities

/// Collapse tab characters to single spaces so that tab-formatted report
/// lines match the space-separated field prefixes.
pub fn normalize_tabs(line: &str) -> String {
    line.replace('\t', " ")
}

/// Strip the first matching prefix from `line` and trim the remainder.
/// Returns `None` when no prefix matches. The same field carries a
/// different prefix per report locale, hence the slice.
pub fn strip_any_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(str::trim)
}
