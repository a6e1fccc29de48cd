use serde::Deserialize;
use crate::structs::github::content_entry::ContentEntry;

/// The contents endpoint answers with an array for directories and a single
/// object when the path names a file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentListing {
    Many(Vec<ContentEntry>),
    One(ContentEntry),
}

impl ContentListing {
    pub fn into_entries(self) -> Vec<ContentEntry> {
        match self {
            ContentListing::Many(entries) => entries,
            ContentListing::One(entry) => vec![entry],
        }
    }
}
