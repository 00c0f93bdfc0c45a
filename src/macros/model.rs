use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored text snippet
///
/// `key` is not unique. `created_time` is set once and only used for
/// ranking and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macro {
    #[serde(default, alias = "Key", deserialize_with = "null_as_empty")]
    pub key: String,
    #[serde(default, alias = "Content", deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(alias = "CreatedTime")]
    pub created_time: DateTime<Utc>,
}

impl Macro {
    /// Create a macro stamped with the current time
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_created_time(key, content, Utc::now())
    }

    pub fn with_created_time(
        key: impl Into<String>,
        content: impl Into<String>,
        created_time: DateTime<Utc>,
    ) -> Self {
        Macro {
            key: key.into(),
            content: content.into(),
            created_time,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
