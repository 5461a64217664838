use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A medicinal plant as published by the Data API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: i32,
    pub name: String,
    pub latin_name: String,
    /// Botanical family, e.g. "Lamiaceae".
    pub family: String,
    /// Short description of the medicinal usage.
    pub usage: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
