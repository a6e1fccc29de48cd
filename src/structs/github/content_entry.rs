use serde::Deserialize;
use crate::enums::content_kind::ContentKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

impl ContentEntry {
    pub fn new(path: &str, kind: ContentKind) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind,
        }
    }

    /// Lower-cased extension of the entry name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}
