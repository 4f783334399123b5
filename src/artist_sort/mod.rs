//! Artist sort-name abbreviation.
//!
//! This module provides:
//! - `aligner`: walks a sort name alongside its unsorted credit and reduces
//!   each forename to initials ("Vivaldi, Antonio" → "Vivaldi, A.")
//! - `initials`: the forename → initials rule
//! - `cache`: the thread-safe cache of computed abbreviations

mod aligner;
mod cache;
mod initials;

pub use aligner::{
    AbbreviationResult, AlignerOptions, Alignment, SortNameAligner, align_sort_names,
};
pub use cache::{AbbreviationCache, CacheKey, CacheKeyMode, CacheStats};
pub use initials::{extract_initials, is_prefix_exempt};
