use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Miniflux writes empty slices and unset values as `null`; read those as the default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a Miniflux `new_entries` webhook
///
/// Fields that are missing or `null` fall back to their defaults, so only
/// malformed JSON or mistyped values are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEntriesEvent {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub event_type: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub feed: Feed,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub feed_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub site_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub feed_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub hash: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub comments_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub published_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub changed_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub content: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub author: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub share_code: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub starred: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub reading_time: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub enclosures: Vec<Enclosure>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enclosure {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub entry_id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub size: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub media_progression: i64,
}
