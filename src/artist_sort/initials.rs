//! Forename to initials conversion.
//!
//! This module provides functions for:
//! - Reducing a forename to initials ("Johann Sebastian" → "J. S.")
//! - Keeping hyphenated forenames hyphenated ("Jean-Guihen" → "J-G.")
//! - Leaving prefix words such as "The" untouched

use crate::constants::PREFIX_EXEMPT_WORDS;

/// Returns true when the forename is one of the words that stay verbatim.
///
/// The comparison is exact and case-sensitive.
///
/// # Examples
/// ```
/// use artistsort_abbrev::artist_sort::is_prefix_exempt;
///
/// assert!(is_prefix_exempt("The"));
/// assert!(is_prefix_exempt("A"));
/// assert!(!is_prefix_exempt("the"));
/// assert!(!is_prefix_exempt("Antonio"));
/// ```
pub fn is_prefix_exempt(forename: &str) -> bool {
    PREFIX_EXEMPT_WORDS.contains(&forename)
}

/// Reduces a forename to initials.
///
/// Every whitespace-separated token becomes its first character followed by
/// a period, and the tokens are joined with single spaces. Hyphenated tokens
/// keep one character per part ("Jean-Guihen" → "J-G."). A forename that is
/// exactly a prefix word ("A", "The") is returned unchanged.
///
/// # Arguments
/// * `forename` - The forename text as it appears in the unsorted credit
///
/// # Returns
/// * `String` - The initials (e.g., "A." for "Antonio")
///
/// # Examples
/// ```
/// use artistsort_abbrev::artist_sort::extract_initials;
///
/// assert_eq!(extract_initials("Antonio"), "A.");
/// assert_eq!(extract_initials("Johann Sebastian"), "J. S.");
/// assert_eq!(extract_initials("Jean-Guihen"), "J-G.");
/// assert_eq!(extract_initials("The"), "The");
/// ```
pub fn extract_initials(forename: &str) -> String {
    if is_prefix_exempt(forename) {
        return forename.to_string();
    }

    forename
        .split_whitespace()
        .map(token_initials)
        .collect::<Vec<_>>()
        .join(" ")
}

fn token_initials(token: &str) -> String {
    let mut initials = token
        .split('-')
        .filter_map(|part| part.chars().next())
        .map(String::from)
        .collect::<Vec<_>>()
        .join("-");
    initials.push('.');
    initials
}
