//! Metadata boundary between the host's tag store and the aligner.
//!
//! The aligner only ever sees strings; this module reads the artist tags out
//! of a record, runs them through the aligner and writes the results back
//! under the `~..._abbrev` tag names.

mod processor;
mod record;

pub use processor::{TagReport, abbreviate_artist_sort_tags, abbreviate_records};
pub use record::{MetadataRecord, TagValues};

/// Narrow access to a tag store that maps tag names to lists of values.
pub trait MetadataFields {
    /// All values for a tag, empty when the tag is absent
    fn get_field(&self, name: &str) -> Vec<String>;

    /// Replaces all values of a tag
    fn set_field(&mut self, name: &str, values: Vec<String>);

    fn has_field(&self, name: &str) -> bool {
        !self.get_field(name).is_empty()
    }
}
