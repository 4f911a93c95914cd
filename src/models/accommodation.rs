use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Bookable unit types at the villa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Villa,
    Master,
    Triple,
    Group,
}

impl RoomKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Villa => "villa",
            RoomKind::Master => "master",
            RoomKind::Triple => "triple",
            RoomKind::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Accommodation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub kind: RoomKind,
    pub title: String,
    pub guests: String,
    /// Current third-party (Airbnb) nightly rate, the comparison price point
    pub base_night: f64,
    pub perks: Vec<String>,
    pub image: Option<String>,
    pub airbnb_url: Option<String>,
}

impl Accommodation {
    /// Built-in units, used when the Accommodations collection is empty or
    /// unreachable so the public cards always render.
    pub fn defaults() -> Vec<Accommodation> {
        vec![
            Accommodation {
                id: None,
                kind: RoomKind::Villa,
                title: "Entire Villa Exclusive".to_string(),
                guests: "16 guests (up to 24)".to_string(),
                base_night: 431.0,
                perks: vec!["Private pool".to_string(), "Lake views".to_string()],
                image: Some("/images/rooms/villa.jpg".to_string()),
                airbnb_url: None,
            },
            Accommodation {
                id: None,
                kind: RoomKind::Master,
                title: "Master Family Suite".to_string(),
                guests: "3 guests (up to 6)".to_string(),
                base_night: 119.0,
                perks: vec!["Lake view".to_string(), "Private balcony".to_string()],
                image: Some("/images/rooms/master.jpg".to_string()),
                airbnb_url: None,
            },
            Accommodation {
                id: None,
                kind: RoomKind::Triple,
                title: "Triple/Twin Rooms".to_string(),
                guests: "3 guests (up to 4)".to_string(),
                base_night: 70.0,
                perks: vec!["Garden view".to_string(), "Twin/Triple beds".to_string()],
                image: Some("/images/rooms/triple.jpg".to_string()),
                airbnb_url: None,
            },
            Accommodation {
                id: None,
                kind: RoomKind::Group,
                title: "Group Room".to_string(),
                guests: "5 guests (up to 8)".to_string(),
                base_night: 119.0,
                perks: vec!["Multiple beds".to_string(), "Shared space".to_string()],
                image: Some("/images/rooms/group.jpg".to_string()),
                airbnb_url: None,
            },
        ]
    }
}
