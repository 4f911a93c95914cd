use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use mongodb::Client;
use std::sync::Arc;

use crate::services::content_service;
use crate::services::pricing_service::{PriceInput, PricingService};

#[derive(Debug, serde::Deserialize)]
pub struct QuoteParams {
    base_night: f64,
    check_in: Option<NaiveDate>,
    reference_date: Option<NaiveDate>,
    standard_pct: Option<i64>,
    last_minute_pct: Option<i64>,
}

/// Savings-calculator endpoint. Percentages omitted from the query come from
/// the stored admin settings; the stored lookup is skipped entirely when the
/// caller supplies both.
pub async fn get_quote(
    data: web::Data<Arc<Client>>,
    params: web::Query<QuoteParams>,
) -> impl Responder {
    let client = data.into_inner();
    let params = params.into_inner();

    let (standard_pct, last_minute_pct) = match (params.standard_pct, params.last_minute_pct) {
        (Some(standard), Some(last_minute)) => (standard, last_minute),
        (standard, last_minute) => {
            let config = content_service::load_discount_config(&client).await;
            (
                standard.unwrap_or(config.standard_pct),
                last_minute.unwrap_or(config.last_minute_pct),
            )
        }
    };

    let input = PriceInput {
        base_night: params.base_night,
        check_in: params.check_in,
        reference_date: params.reference_date,
        standard_pct,
        last_minute_pct,
    };

    HttpResponse::Ok().json(PricingService::compute_direct_price(&input))
}
