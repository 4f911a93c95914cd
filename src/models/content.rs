use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Text,
    Image,
}

/// One admin-editable fragment of page copy or imagery, keyed by slug
/// (e.g. "accommodation-card-save-badge-villa").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentSection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub value: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Discount percentages as edited in the admin pricing form. Free-form
/// integers; clamped into range when saved and again by the pricing engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscountSettings {
    pub standard_pct: i64,
    pub last_minute_pct: i64,
    pub updated_at: Option<DateTime<Utc>>,
}
