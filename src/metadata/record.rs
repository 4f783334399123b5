//! Serializable metadata record used at the integration boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MetadataFields;

/// Value of a single tag: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValues {
    Single(String),
    Multiple(Vec<String>),
}

impl TagValues {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            TagValues::Single(value) => vec![value.clone()],
            TagValues::Multiple(values) => values.clone(),
        }
    }
}

impl From<Vec<String>> for TagValues {
    fn from(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            TagValues::Single(values.remove(0))
        } else {
            TagValues::Multiple(values)
        }
    }
}

/// Tag name → value(s) map for one track.
///
/// Deserializes from a JSON object such as
/// `{"artist": "Antonio Vivaldi", "~artists": ["Antonio Vivaldi"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: BTreeMap<String, TagValues>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a single-valued tag
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), TagValues::Single(value.into()));
        self
    }

    /// Builder-style setter for a multi-valued tag
    pub fn with_tags<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.fields.insert(name.into(), TagValues::Multiple(values));
        self
    }
}

impl MetadataFields for MetadataRecord {
    fn get_field(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .map(TagValues::to_vec)
            .unwrap_or_default()
    }

    fn set_field(&mut self, name: &str, values: Vec<String>) {
        self.fields.insert(name.to_string(), values.into());
    }
}
