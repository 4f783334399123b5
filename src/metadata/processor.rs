//! Applies sort-name abbreviation to the artist tags of a metadata record.

use tracing::{debug, error, info, instrument, warn};

use super::MetadataFields;
use crate::artist_sort::SortNameAligner;
use crate::constants::tags::ABBREVIATE_TAGS;

/// Counters collected while processing one or more records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagReport {
    /// Sort values that had a matching unsorted value
    pub values_processed: usize,
    /// Values aligned successfully (including cache hits)
    pub values_aligned: usize,
    /// Values left unabbreviated because alignment failed
    pub values_failed: usize,
    /// Output tags written
    pub tags_written: usize,
}

impl TagReport {
    pub fn merge(&mut self, other: TagReport) {
        self.values_processed += other.values_processed;
        self.values_aligned += other.values_aligned;
        self.values_failed += other.values_failed;
        self.tags_written += other.tags_written;
    }
}

/// Writes abbreviated copies of the artist sort tags into `metadata`.
///
/// For each (sort, unsorted, output) tag triple where both source tags are
/// present, the i-th sort value is aligned with the i-th unsorted value.
/// Sort values without a partner and values that fail to align are copied
/// unchanged, so the output tag always has as many values as the sort tag.
///
/// # Example
/// ```
/// use artistsort_abbrev::artist_sort::SortNameAligner;
/// use artistsort_abbrev::metadata::{MetadataFields, MetadataRecord, abbreviate_artist_sort_tags};
///
/// let aligner = SortNameAligner::new();
/// let mut record = MetadataRecord::new()
///     .with_tag("artistsort", "Vivaldi, Antonio")
///     .with_tag("artist", "Antonio Vivaldi");
///
/// let report = abbreviate_artist_sort_tags(&aligner, &mut record);
/// assert_eq!(report.tags_written, 1);
/// assert_eq!(record.get_field("~artistsort_abbrev"), vec!["Vivaldi, A."]);
/// ```
#[instrument(level = "debug", skip_all)]
pub fn abbreviate_artist_sort_tags<M>(aligner: &SortNameAligner, metadata: &mut M) -> TagReport
where
    M: MetadataFields + ?Sized,
{
    let mut report = TagReport::default();

    for (sort_tag, unsorted_tag, output_tag) in ABBREVIATE_TAGS {
        let sorts = metadata.get_field(sort_tag);
        let unsorts = metadata.get_field(unsorted_tag);
        if sorts.is_empty() || unsorts.is_empty() {
            continue;
        }

        let mut abbreviated = Vec::with_capacity(sorts.len());
        for (index, sort) in sorts.iter().enumerate() {
            let Some(unsorted) = unsorts.get(index) else {
                abbreviated.push(sort.clone());
                continue;
            };

            let result = aligner.abbreviate(sort, unsorted);
            report.values_processed += 1;
            if result.success {
                report.values_aligned += 1;
            } else {
                report.values_failed += 1;
                match &result.diagnostic {
                    Some(err) if !err.is_match_failure() => {
                        error!("Leaving {sort_tag}[{index}] unabbreviated: {err}")
                    }
                    _ => warn!(
                        "Leaving {sort_tag}[{index}] unabbreviated: {}",
                        result.diagnostic_message().unwrap_or_default()
                    ),
                }
            }
            abbreviated.push(result.abbreviated_text);
        }

        debug!("Setting {output_tag} = {abbreviated:?}");
        metadata.set_field(output_tag, abbreviated);
        report.tags_written += 1;
    }

    report
}

/// Runs [`abbreviate_artist_sort_tags`] over a batch of records
pub fn abbreviate_records<M: MetadataFields>(
    aligner: &SortNameAligner,
    records: &mut [M],
) -> TagReport {
    let mut total = TagReport::default();
    for record in records.iter_mut() {
        total.merge(abbreviate_artist_sort_tags(aligner, record));
    }

    info!(
        "Processed {} records: values_processed={}, values_aligned={}, values_failed={}, tags_written={}",
        records.len(),
        total.values_processed,
        total.values_aligned,
        total.values_failed,
        total.tags_written
    );
    total
}
