//! Artist sort-name abbreviation library
//!
//! This library shortens artist sort names to surname and initials by
//! aligning them with the unsorted artist credit, keeping every separator and
//! join phrase of the sort name intact.
//!
//! # Examples
//!
//! ```rust
//! use artistsort_abbrev::artist_sort::SortNameAligner;
//! use artistsort_abbrev::metadata::{MetadataFields, MetadataRecord, abbreviate_artist_sort_tags};
//!
//! let aligner = SortNameAligner::new();
//!
//! // One sort name
//! let result = aligner.abbreviate(
//!     "Vivaldi, Antonio; Queyras, Jean-Guihen",
//!     "Antonio Vivaldi; Jean-Guihen Queyras",
//! );
//! assert_eq!(result.abbreviated_text, "Vivaldi, A.; Queyras, J-G.");
//!
//! // The artist tags of a track
//! let mut track = MetadataRecord::new()
//!     .with_tag("albumartistsort", "Beatles, The")
//!     .with_tag("albumartist", "The Beatles");
//! abbreviate_artist_sort_tags(&aligner, &mut track);
//! assert_eq!(track.get_field("~albumartistsort_abbrev"), vec!["Beatles, The"]);
//! ```

pub mod artist_sort;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use artist_sort::{AbbreviationResult, AlignerOptions, SortNameAligner};
pub use config::Config;
pub use error::{AlignmentError, AppError};
pub use metadata::{MetadataFields, MetadataRecord, TagReport};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
