use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::models::contact::{ContactInfo, ContactInput, ContactSubmission};
use crate::services::validation::is_valid_email;

pub async fn submit_contact(
    data: web::Data<Arc<Client>>,
    input: web::Json<ContactInput>,
) -> impl Responder {
    let client = data.into_inner();
    let input = input.into_inner();

    if input.name.trim().is_empty() || input.message.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields",
            "required": ["name", "email", "message"]
        }));
    }
    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid email format"
        }));
    }

    let collection: mongodb::Collection<ContactSubmission> =
        client.database("Villa").collection("Contacts");

    let submission = ContactSubmission {
        id: None,
        name: input.name,
        email: input.email,
        phone: input.phone,
        message: input.message,
        status: "new".to_string(),
        submitted_at: Some(Utc::now()),
    };

    match collection.insert_one(&submission).await {
        Ok(insert_result) => {
            let submission_id = insert_result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_string())
                .unwrap_or_default();

            HttpResponse::Created().json(serde_json::json!({
                "success": true,
                "submission_id": submission_id,
                "message": "Thank you for contacting Ko Lake Villa. We will get back to you soon!"
            }))
        }
        Err(err) => {
            eprintln!("Failed to insert contact submission: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to process contact form")
        }
    }
}

pub async fn contact_info() -> impl Responder {
    HttpResponse::Ok().json(ContactInfo::from_env())
}

/// Admin: all lead-capture submissions, newest first.
pub async fn list_submissions(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContactSubmission> =
        client.database("Villa").collection("Contacts");

    match collection
        .find(doc! {})
        .sort(doc! { "submitted_at": -1 })
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<ContactSubmission>>().await {
            Ok(submissions) => HttpResponse::Ok().json(submissions),
            Err(err) => {
                eprintln!("Failed to collect contact submissions: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect submissions")
            }
        },
        Err(err) => {
            eprintln!("Failed to find contact submissions: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find submissions")
        }
    }
}
