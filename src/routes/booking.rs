use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use bson::{doc, oid::ObjectId};
use mongodb::Client;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

use crate::models::accommodation::Accommodation;
use crate::models::booking::{BookingDetails, BookingInput};
use crate::services::content_service;
use crate::services::pricing_service::{PriceInput, PricingService};
use crate::services::validation::is_valid_email;

fn generate_reference() -> String {
    let code: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("KLV-{}", code.to_uppercase())
}

/// Direct-booking requests are leads, not payments: we persist the request
/// as "pending" and quote the direct price for the chosen room alongside it.
pub async fn create_booking(
    data: web::Data<Arc<Client>>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let client = data.into_inner();
    let input = input.into_inner();

    if input.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name is required");
    }
    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }
    if input.check_out <= input.check_in {
        return HttpResponse::BadRequest().body("Check-out must be after check-in");
    }

    let collection: mongodb::Collection<BookingDetails> =
        client.database("Villa").collection("Bookings");

    let time = Utc::now();
    let booking = BookingDetails {
        id: None,
        reference: generate_reference(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        room: input.room,
        check_in: input.check_in,
        check_out: input.check_out,
        guests: input.guests,
        message: input.message,
        status: "pending".to_string(),
        created_at: Some(time),
        updated_at: Some(time),
    };

    // Quote the direct price so the confirmation can show the savings
    let base_night = base_rate_for(&client, &booking).await;
    let config = content_service::load_discount_config(&client).await;
    let quote = PricingService::compute_direct_price(&PriceInput::for_rate(
        base_night,
        Some(booking.check_in),
        &config,
    ));

    match collection.insert_one(&booking).await {
        Ok(insert_result) => {
            let booking_id = insert_result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_string())
                .unwrap_or_default();

            HttpResponse::Created().json(serde_json::json!({
                "success": true,
                "booking_id": booking_id,
                "reference": booking.reference,
                "status": booking.status,
                "quote": quote,
                "message": "Booking request received successfully"
            }))
        }
        Err(err) => {
            eprintln!("Error creating booking: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create booking")
        }
    }
}

async fn base_rate_for(client: &Client, booking: &BookingDetails) -> f64 {
    let collection: mongodb::Collection<Accommodation> =
        client.database("Villa").collection("Accommodations");

    match collection
        .find_one(doc! { "kind": booking.room.as_str() })
        .await
    {
        Ok(Some(unit)) => unit.base_night,
        _ => Accommodation::defaults()
            .into_iter()
            .find(|unit| unit.kind == booking.room)
            .map(|unit| unit.base_night)
            .unwrap_or(0.0),
    }
}

pub async fn get_booking(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<BookingDetails> =
        client.database("Villa").collection("Bookings");

    let booking_id = path.into_inner().0;
    let booking_object_id = match ObjectId::parse_str(&booking_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Invalid booking ID format: {:?}", e);
            return HttpResponse::BadRequest().body("Invalid booking ID format");
        }
    };

    match collection.find_one(doc! { "_id": booking_object_id }).await {
        Ok(Some(booking)) => HttpResponse::Ok().json(booking),
        Ok(None) => HttpResponse::NotFound().body("Booking not found"),
        Err(e) => {
            eprintln!("Error fetching booking: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to fetch booking")
        }
    }
}

/// Admin: the full booking pipeline, newest first.
pub async fn list_bookings(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<BookingDetails> =
        client.database("Villa").collection("Bookings");

    match collection.find(doc! {}).sort(doc! { "created_at": -1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<BookingDetails>>().await {
            Ok(bookings) => HttpResponse::Ok().json(bookings),
            Err(err) => {
                eprintln!("Error retrieving bookings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to retrieve bookings")
            }
        },
        Err(err) => {
            eprintln!("Error fetching bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch bookings")
        }
    }
}
