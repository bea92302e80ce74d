use serde::{Deserialize, Deserializer};

/// The caller as seen by Shortcut's `member` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mention_name: String,
}

/// A single story from a search result.
///
/// Timestamps stay as the service formats them (fixed-width RFC 3339), so
/// plain string comparison orders them chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Story {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub started_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub moved_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub stories: StoryPage,
}

/// One page of search results. Only `data` is consumed; `next` is never followed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoryPage {
    #[serde(deserialize_with = "null_as_default")]
    pub next: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Story>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
}

// Shortcut sends `null` for unset fields (e.g. `started_at` on an unstarted story).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
