use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactSubmission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: String,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Static villa contact details returned on the public contact page.
#[derive(Debug, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
}

impl ContactInfo {
    pub fn from_env() -> Self {
        Self {
            name: "Ko Lake Villa".to_string(),
            email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "info@kolakevilla.com".to_string()),
            phone: std::env::var("CONTACT_PHONE").unwrap_or_else(|_| "+94 XXX XXX XXX".to_string()),
            address: "Beautiful Lake Location, Sri Lanka".to_string(),
            hours: "Available 24/7 for inquiries".to_string(),
        }
    }
}
