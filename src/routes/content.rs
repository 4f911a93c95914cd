use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::content::{ContentSection, SectionType};
use crate::services::content_service;

pub async fn get_all_content(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContentSection> =
        client.database("Villa").collection("Content");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<ContentSection>>().await {
            Ok(sections) => HttpResponse::Ok().json(sections),
            Err(err) => {
                eprintln!("Failed to collect content sections: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect content")
            }
        },
        Err(err) => {
            eprintln!("Failed to find content sections: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find content")
        }
    }
}

pub async fn get_content(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContentSection> =
        client.database("Villa").collection("Content");

    let section_id = path.into_inner().0;
    match collection.find_one(doc! { "_id": &section_id }).await {
        Ok(Some(section)) => HttpResponse::Ok().json(section),
        Ok(None) => HttpResponse::NotFound().body("Content section not found"),
        Err(err) => {
            eprintln!("Failed to fetch content section: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch content")
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ContentUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub value: String,
}

/// Admin: upsert one editable section (text or image slug).
pub async fn update_content(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    input: web::Json<ContentUpdate>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContentSection> =
        client.database("Villa").collection("Content");

    let input = input.into_inner();
    if input.id.trim().is_empty() {
        return HttpResponse::BadRequest().body("Content id is required");
    }

    let section = ContentSection {
        id: input.id,
        section_type: input.section_type,
        value: input.value,
        updated_at: Some(Utc::now()),
    };

    let section_type = match section.section_type {
        SectionType::Text => "text",
        SectionType::Image => "image",
    };

    let update = doc! {
        "$set": {
            "type": section_type,
            "value": &section.value,
            "updated_at": section.updated_at.map(|t| t.to_rfc3339()),
        }
    };

    match collection
        .update_one(doc! { "_id": &section.id }, update)
        .upsert(true)
        .await
    {
        Ok(_) => {
            println!("Content section '{}' updated by {}", section.id, user.email);
            HttpResponse::Ok().json(section)
        }
        Err(err) => {
            eprintln!("Failed to update content section: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update content")
        }
    }
}

/// Admin: current effective discount percentages.
pub async fn get_discount_settings(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let config = content_service::load_discount_config(&client).await;
    HttpResponse::Ok().json(config)
}

#[derive(Debug, serde::Deserialize)]
pub struct DiscountUpdate {
    pub standard_pct: i64,
    pub last_minute_pct: i64,
}

/// Admin: save discount percentages from the pricing editor. Free-form
/// integers are accepted and clamped into [0, 100] on the way in.
pub async fn update_discount_settings(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    input: web::Json<DiscountUpdate>,
) -> impl Responder {
    let client = data.into_inner();
    let input = input.into_inner();

    match content_service::save_discount_settings(&client, input.standard_pct, input.last_minute_pct)
        .await
    {
        Ok(settings) => {
            println!(
                "Discount settings saved by {}: standard {}%, last-minute {}%",
                user.email, settings.standard_pct, settings.last_minute_pct
            );
            HttpResponse::Ok().json(settings)
        }
        Err(err) => {
            eprintln!("Failed to save discount settings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save discount settings")
        }
    }
}
