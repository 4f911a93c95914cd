use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::accommodation::RoomKind;

#[derive(Debug, Deserialize)]
pub struct BookingInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub room: RoomKind,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: Option<i32>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BookingDetails {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Human-readable code quoted in follow-up emails, e.g. "KLV-7GX2QD"
    pub reference: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub room: RoomKind,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: Option<i32>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
