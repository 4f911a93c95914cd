use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Client;

use crate::models::content::DiscountSettings;
use crate::services::pricing_service::{DiscountConfig, PricingService};

pub const DB_NAME: &str = "Villa";
pub const SETTINGS_COLLECTION: &str = "Settings";

/// Fixed document id for the single discount-settings record.
pub const PRICING_SETTINGS_ID: &str = "pricing";

/// Load the admin-edited discount percentages, falling back to environment
/// defaults when the record is missing or the database is unreachable. The
/// public pricing surfaces must keep rendering either way.
pub async fn load_discount_config(client: &Client) -> DiscountConfig {
    let collection: mongodb::Collection<DiscountSettings> =
        client.database(DB_NAME).collection(SETTINGS_COLLECTION);

    match collection.find_one(doc! { "_id": PRICING_SETTINGS_ID }).await {
        Ok(Some(settings)) => DiscountConfig {
            standard_pct: PricingService::clamp_pct(settings.standard_pct) as i64,
            last_minute_pct: PricingService::clamp_pct(settings.last_minute_pct) as i64,
        },
        Ok(None) => DiscountConfig::from_env(),
        Err(err) => {
            eprintln!("Failed to load discount settings, using defaults: {:?}", err);
            DiscountConfig::from_env()
        }
    }
}

/// Persist discount percentages from the admin pricing editor. Values are
/// clamped into [0, 100] here, the primary validation point; the pricing
/// engine clamps again as a second layer.
pub async fn save_discount_settings(
    client: &Client,
    standard_pct: i64,
    last_minute_pct: i64,
) -> Result<DiscountSettings, mongodb::error::Error> {
    let collection: mongodb::Collection<DiscountSettings> =
        client.database(DB_NAME).collection(SETTINGS_COLLECTION);

    let settings = DiscountSettings {
        standard_pct: PricingService::clamp_pct(standard_pct) as i64,
        last_minute_pct: PricingService::clamp_pct(last_minute_pct) as i64,
        updated_at: Some(Utc::now()),
    };

    let update = doc! {
        "$set": {
            "standard_pct": settings.standard_pct,
            "last_minute_pct": settings.last_minute_pct,
            "updated_at": settings.updated_at.map(|t| t.to_rfc3339()),
        }
    };

    collection
        .update_one(doc! { "_id": PRICING_SETTINGS_ID }, update)
        .upsert(true)
        .await?;

    Ok(settings)
}
