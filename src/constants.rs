//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed literals of the sort-name alignment
//! and the names used for config, log and environment lookups.

/// Separator between surname and forename in a sort name
pub const SORT_NAME_SEPARATOR: &str = ", ";

/// Words kept verbatim instead of being reduced to an initial
/// (e.g. "Beatles, The" / "The Beatles")
pub const PREFIX_EXEMPT_WORDS: [&str; 2] = ["A", "The"];

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "artistsort_abbrev";

/// Default log file name
pub const LOG_FILE_NAME: &str = "artistsort_abbrev.log";

/// Default tracing directive for the binary
pub const DEFAULT_LOG_DIRECTIVE: &str = "artistsort_abbrev=info";

/// Environment variables that override config file values
pub mod env_vars {
    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "ARTISTSORT_LOG_FILE";

    /// Overrides `abbreviation.strict_reconstruction` (`true` / `false`)
    pub const STRICT_RECONSTRUCTION: &str = "ARTISTSORT_STRICT_RECONSTRUCTION";

    /// Overrides `abbreviation.cache_key` (`sorted` / `pair`)
    pub const CACHE_KEY: &str = "ARTISTSORT_CACHE_KEY";
}

/// Tag names read and written by the metadata processor
pub mod tags {
    /// (sort tag, unsorted tag, abbreviated output tag)
    pub const ABBREVIATE_TAGS: [(&str, &str, &str); 4] = [
        ("albumartistsort", "albumartist", "~albumartistsort_abbrev"),
        ("artistsort", "artist", "~artistsort_abbrev"),
        (
            "~albumartists_sort",
            "~albumartists",
            "~albumartists_sort_abbrev",
        ),
        ("~artists_sort", "~artists", "~artists_sort_abbrev"),
    ];
}
