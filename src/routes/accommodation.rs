use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::models::accommodation::Accommodation;
use crate::services::content_service;
use crate::services::pricing_service::{PriceInput, PriceResult, PricingService};

#[derive(serde::Deserialize)]
pub struct QueryParams {
    check_in: Option<NaiveDate>,
}

/// An accommodation plus its computed direct-booking price, as rendered on
/// the public cards.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AccommodationCard {
    #[serde(flatten)]
    pub accommodation: Accommodation,
    pub pricing: PriceResult,
}

/// Public accommodation cards: every unit with its direct-booking price
/// computed from the stored discount settings. An optional check-in date
/// lets the caller surface the last-minute discount.
pub async fn get_accommodations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Accommodation> =
        client.database("Villa").collection("Accommodations");

    let units = match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Accommodation>>().await {
            Ok(units) if !units.is_empty() => units,
            Ok(_) => Accommodation::defaults(),
            Err(err) => {
                eprintln!("Failed to collect accommodations: {:?}", err);
                Accommodation::defaults()
            }
        },
        Err(err) => {
            eprintln!("Failed to find accommodations: {:?}", err);
            Accommodation::defaults()
        }
    };

    let config = content_service::load_discount_config(&client).await;

    let cards: Vec<AccommodationCard> = units
        .into_iter()
        .map(|unit| {
            let pricing = PricingService::compute_direct_price(&PriceInput::for_rate(
                unit.base_night,
                params.check_in,
                &config,
            ));
            AccommodationCard {
                accommodation: unit,
                pricing,
            }
        })
        .collect();

    HttpResponse::Ok().json(cards)
}
