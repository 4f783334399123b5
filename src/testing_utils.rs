use crate::metadata::MetadataRecord;

/// Test utilities for creating mock metadata records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a record with a single artist sort/unsorted pair
    pub fn create_artist_record(sorted: &str, unsorted: &str) -> MetadataRecord {
        MetadataRecord::new()
            .with_tag("artistsort", sorted)
            .with_tag("artist", unsorted)
    }

    /// Creates a classical track: a composer and a soloist on the track,
    /// the composer as album artist
    pub fn create_classical_track() -> MetadataRecord {
        MetadataRecord::new()
            .with_tag("artistsort", "Vivaldi, Antonio; Queyras, Jean-Guihen")
            .with_tag("artist", "Antonio Vivaldi; Jean-Guihen Queyras")
            .with_tags("~artists_sort", ["Vivaldi, Antonio", "Queyras, Jean-Guihen"])
            .with_tags("~artists", ["Antonio Vivaldi", "Jean-Guihen Queyras"])
            .with_tag("albumartistsort", "Vivaldi, Antonio")
            .with_tag("albumartist", "Antonio Vivaldi")
            .with_tags("~albumartists_sort", ["Vivaldi, Antonio"])
            .with_tags("~albumartists", ["Antonio Vivaldi"])
    }

    /// Creates a band track where the "forename" is a prefix word
    pub fn create_band_track() -> MetadataRecord {
        MetadataRecord::new()
            .with_tag("artistsort", "Beatles, The")
            .with_tag("artist", "The Beatles")
            .with_tag("albumartistsort", "Beatles, The")
            .with_tag("albumartist", "The Beatles")
    }

    /// Creates a track whose sort name is in a different language from the credit
    pub fn create_locale_mismatch_track() -> MetadataRecord {
        Self::create_artist_record("Verdi, Giuseppe, Vivaldi, Antonio", "Joe Green, Antonio Vivaldi")
    }
}
