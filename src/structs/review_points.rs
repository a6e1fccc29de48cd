use serde::{Deserialize, Deserializer, Serialize};

/// Shape the completion model is asked to answer with.
/// A missing or `null` category reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPoints {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub good: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bad: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub improvements: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ReviewPoints {
    pub fn truncated(mut self, limit: usize) -> Self {
        self.good.truncate(limit);
        self.bad.truncate(limit);
        self.improvements.truncate(limit);
        self
    }
}
