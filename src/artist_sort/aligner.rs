//! Sort-name alignment.
//!
//! A sort name such as `"Vivaldi, Antonio; Queyras, Jean-Guihen"` is walked
//! alongside its unsorted credit `"Antonio Vivaldi; Jean-Guihen Queyras"`.
//! Each surname found in the sorted text is located in the unsorted text;
//! whatever precedes it there is the forename, which must also follow the
//! surname in the sorted text. The forename is replaced by its initials and
//! every other byte of the sorted text is kept, giving
//! `"Vivaldi, A.; Queyras, J-G."`.

use tracing::{debug, error, instrument, warn};

use super::cache::{AbbreviationCache, CacheKeyMode};
use super::initials::extract_initials;
use crate::constants::SORT_NAME_SEPARATOR;
use crate::error::AlignmentError;

/// Behaviour switches for [`SortNameAligner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignerOptions {
    /// Treat a reconstructed unsorted text that differs from the input as a
    /// failure. When false the abbreviation is still returned and cached,
    /// with the mismatch attached as a diagnostic.
    pub strict_reconstruction: bool,
    pub cache_key: CacheKeyMode,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            strict_reconstruction: true,
            cache_key: CacheKeyMode::Sorted,
        }
    }
}

/// Outcome of one [`SortNameAligner::abbreviate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationResult {
    /// The abbreviated sort name, or the original sort name on failure
    pub abbreviated_text: String,
    pub success: bool,
    pub diagnostic: Option<AlignmentError>,
    /// Whether the text came straight from the cache
    pub from_cache: bool,
}

impl AbbreviationResult {
    fn aligned(abbreviated_text: String) -> Self {
        Self {
            abbreviated_text,
            success: true,
            diagnostic: None,
            from_cache: false,
        }
    }

    fn cached(abbreviated_text: String) -> Self {
        Self {
            abbreviated_text,
            success: true,
            diagnostic: None,
            from_cache: true,
        }
    }

    fn failed(original: &str, diagnostic: AlignmentError) -> Self {
        Self {
            abbreviated_text: original.to_string(),
            success: false,
            diagnostic: Some(diagnostic),
            from_cache: false,
        }
    }

    /// Diagnostic rendered for a log line
    pub fn diagnostic_message(&self) -> Option<String> {
        self.diagnostic.as_ref().map(ToString::to_string)
    }
}

/// Text produced by a full alignment pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Sorted text with every forename reduced to initials
    pub abbreviated: String,
    /// Unsorted text rebuilt from the pieces consumed during the pass.
    /// Equal to the input unless part of it was never matched.
    pub rebuilt_unsorted: String,
}

/// Abbreviates sort names and remembers the results.
///
/// # Example
/// ```
/// use artistsort_abbrev::artist_sort::SortNameAligner;
///
/// let aligner = SortNameAligner::new();
/// let result = aligner.abbreviate("Vivaldi, Antonio", "Antonio Vivaldi");
/// assert!(result.success);
/// assert_eq!(result.abbreviated_text, "Vivaldi, A.");
/// ```
#[derive(Debug, Default)]
pub struct SortNameAligner {
    options: AlignerOptions,
    cache: AbbreviationCache,
}

impl SortNameAligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AlignerOptions) -> Self {
        Self {
            options,
            cache: AbbreviationCache::new(),
        }
    }

    pub fn options(&self) -> AlignerOptions {
        self.options
    }

    pub fn cache(&self) -> &AbbreviationCache {
        &self.cache
    }

    /// Abbreviates `sorted_text` using `unsorted_text` to find the forenames.
    ///
    /// A cached abbreviation for the same key is returned without looking at
    /// `unsorted_text` again. On failure the original sorted text is returned
    /// with `success == false` and nothing is cached.
    #[instrument(level = "debug", skip(self))]
    pub fn abbreviate(&self, sorted_text: &str, unsorted_text: &str) -> AbbreviationResult {
        let key = self.options.cache_key.key_for(sorted_text, unsorted_text);
        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            debug!("Using cached abbreviation: '{sorted_text}' -> '{cached}'");
            return AbbreviationResult::cached(cached);
        }

        let result = self.compute(sorted_text, unsorted_text);
        if result.success {
            cache.put(key, result.abbreviated_text.clone());
        }
        result
    }

    fn compute(&self, sorted_text: &str, unsorted_text: &str) -> AbbreviationResult {
        let alignment = match align_sort_names(sorted_text, unsorted_text) {
            Ok(alignment) => alignment,
            Err(err) => {
                warn!("Could not abbreviate '{sorted_text}' against '{unsorted_text}': {err}");
                return AbbreviationResult::failed(sorted_text, err);
            }
        };

        if alignment.rebuilt_unsorted == unsorted_text {
            debug!(
                "Abbreviated sort name: '{sorted_text}' -> '{}'",
                alignment.abbreviated
            );
            return AbbreviationResult::aligned(alignment.abbreviated);
        }

        let mismatch =
            AlignmentError::reconstruction_mismatch(unsorted_text, &alignment.rebuilt_unsorted);
        if self.options.strict_reconstruction {
            error!("Discarding abbreviation of '{sorted_text}': {mismatch}");
            AbbreviationResult::failed(sorted_text, mismatch)
        } else {
            warn!(
                "Keeping abbreviation '{}' despite: {mismatch}",
                alignment.abbreviated
            );
            AbbreviationResult {
                diagnostic: Some(mismatch),
                ..AbbreviationResult::aligned(alignment.abbreviated)
            }
        }
    }
}

/// Runs one alignment pass without consulting any cache.
///
/// Returns the abbreviated text together with the rebuilt unsorted text so
/// the caller can check that the whole credit was accounted for.
///
/// # Example
/// ```
/// use artistsort_abbrev::artist_sort::align_sort_names;
///
/// let alignment = align_sort_names("Beatles, The", "The Beatles").unwrap();
/// assert_eq!(alignment.abbreviated, "Beatles, The");
/// assert_eq!(alignment.rebuilt_unsorted, "The Beatles");
/// ```
pub fn align_sort_names(
    sorted_text: &str,
    unsorted_text: &str,
) -> Result<Alignment, AlignmentError> {
    let mut state = AlignmentState::new(sorted_text, unsorted_text);
    while !state.is_exhausted() {
        if let Step::Finished = state.step()? {
            break;
        }
    }
    Ok(state.finish())
}

enum Step {
    Continue,
    Finished,
}

struct AlignmentState<'a> {
    sorted: &'a str,
    unsorted: &'a str,
    new_sorted: String,
    new_unsorted: String,
}

impl<'a> AlignmentState<'a> {
    fn new(sorted: &'a str, unsorted: &'a str) -> Self {
        Self {
            sorted,
            unsorted,
            new_sorted: String::with_capacity(sorted.len()),
            new_unsorted: String::with_capacity(unsorted.len()),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.sorted.is_empty() || self.unsorted.is_empty()
    }

    /// Consumes one name (or the terminal remainder) from both cursors.
    fn step(&mut self) -> Result<Step, AlignmentError> {
        let Some((surname, rest)) = self.sorted.split_once(SORT_NAME_SEPARATOR) else {
            self.move_remainder();
            return Ok(Step::Finished);
        };
        // "Surname, " at the very end
        if rest.is_empty() {
            self.move_remainder();
            return Ok(Step::Finished);
        }

        let unsorted = self.unsorted.trim_start();
        self.new_unsorted
            .push_str(&self.unsorted[..self.unsorted.len() - unsorted.len()]);
        self.unsorted = unsorted;

        let trimmed_surname = surname.trim_start();
        self.new_sorted
            .push_str(&surname[..surname.len() - trimmed_surname.len()]);
        let mut surname = trimmed_surname;

        // Same "Surname, " on both sides: nothing to abbreviate here
        let verbatim = format!("{surname}{SORT_NAME_SEPARATOR}");
        if self.unsorted.starts_with(&verbatim) {
            self.new_sorted.push_str(&verbatim);
            self.new_unsorted.push_str(&verbatim);
            self.sorted = rest;
            self.unsorted = &self.unsorted[verbatim.len()..];
            return Ok(Step::Continue);
        }

        if surname.is_empty() {
            return Err(AlignmentError::surname_not_found(surname, self.unsorted));
        }

        // Leading join-phrase words present in both texts
        let mut unsorted = self.unsorted;
        if !unsorted.contains(&format!(" {surname}")) {
            while let (Some((sorted_word, sorted_tail)), Some((unsorted_word, unsorted_tail))) =
                (split_first_word(surname), split_first_word(unsorted))
            {
                if sorted_word != unsorted_word || sorted_tail.is_empty() {
                    break;
                }
                self.new_sorted
                    .push_str(&surname[..surname.len() - sorted_tail.len()]);
                self.new_unsorted
                    .push_str(&unsorted[..unsorted.len() - unsorted_tail.len()]);
                surname = sorted_tail;
                unsorted = unsorted_tail;
            }
        }

        let needle = format!(" {surname}");
        let Some(position) = unsorted.find(&needle) else {
            return Err(AlignmentError::surname_not_found(surname, unsorted));
        };

        let forename = &unsorted[..position];
        let Some(after_forename) = rest.strip_prefix(forename) else {
            return Err(AlignmentError::forename_mismatch(forename, rest));
        };
        // "John" must not match the start of "Johnny"
        if !forename.is_empty() && after_forename.starts_with(char::is_alphanumeric) {
            return Err(AlignmentError::forename_mismatch(forename, rest));
        }

        self.new_sorted.push_str(surname);
        self.new_sorted.push_str(SORT_NAME_SEPARATOR);
        self.new_sorted.push_str(&extract_initials(forename));
        self.sorted = after_forename;

        self.new_unsorted.push_str(forename);
        self.new_unsorted.push_str(&needle);
        self.unsorted = &unsorted[position + needle.len()..];

        Ok(Step::Continue)
    }

    fn move_remainder(&mut self) {
        self.new_sorted.push_str(self.sorted);
        self.new_unsorted.push_str(self.unsorted);
        self.sorted = "";
        self.unsorted = "";
    }

    /// Sorted text left over once the unsorted side ran out is kept as is.
    /// Unsorted text left over is not, so the rebuilt text exposes it.
    fn finish(mut self) -> Alignment {
        self.new_sorted.push_str(self.sorted);
        Alignment {
            abbreviated: self.new_sorted,
            rebuilt_unsorted: self.new_unsorted,
        }
    }
}

/// Splits off the first word of text without leading whitespace.
///
/// Returns `(word, tail)` where `tail` starts after the whitespace that
/// follows the word, or `None` when the text is a single word.
fn split_first_word(text: &str) -> Option<(&str, &str)> {
    let end = text.find(char::is_whitespace)?;
    Some((&text[..end], text[end..].trim_start()))
}
