use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A knowledge-base article shown on the public browsing pages.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<NaiveDateTime>,
}
