use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::Slug;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Tool references, kept as written; unknown ones are skipped when resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl BlogPost {
    pub fn reading_time_minutes(&self) -> usize {
        reading_time_minutes(&self.content)
    }
}

/// Estimated reading time in whole minutes, never below one.
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    // ceil(words / wpm)
    let minutes = (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
    minutes.max(1)
}
