//! SQL utility functions

/// LIKE wildcard characters that `escape_like_wildcards` neutralises
const LIKE_WILDCARDS: [char; 2] = ['_', '%'];

/// Check whether a string contains a LIKE wildcard (`_` or `%`)
pub fn has_like_wildcard(s: &str) -> bool {
    s.contains(LIKE_WILDCARDS)
}

/// Backslash-escape LIKE wildcards (`_`, `%`) in user input
///
/// Backslashes already present in the input are left alone, so a value ending
/// in `\` changes the meaning of the wrapping `%`. Callers pair the result with
/// `ESCAPE '\'`.
///
/// # Example
///
/// ```
/// use condsql::utils::sql::escape_like_wildcards;
///
/// let pattern = format!("%{}%", escape_like_wildcards("100% match_test"));
/// assert_eq!(pattern, "%100\\% match\\_test%");
/// ```
pub fn escape_like_wildcards(s: &str) -> String {
    s.replace('_', "\\_").replace('%', "\\%")
}
