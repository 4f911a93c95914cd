use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::FindOptions, Client};
use std::sync::Arc;

use crate::models::gallery::GalleryImage;
use crate::services::image_service::{ImageData, ImageService};

pub async fn get_gallery(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<GalleryImage> =
        client.database("Villa").collection("Gallery");

    let mut options = FindOptions::default();
    options.sort = Some(doc! { "sort_order": 1, "uploaded_at": -1 });

    match collection.find(doc! {}).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<GalleryImage>>().await {
            Ok(images) => HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "total": images.len(),
                "images": images,
            })),
            Err(err) => {
                eprintln!("Failed to collect gallery images: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect gallery images")
            }
        },
        Err(err) => {
            eprintln!("Failed to find gallery images: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find gallery images")
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct GalleryUpload {
    pub image: ImageData,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

/// Admin: upload a base64 image payload to Cloud Storage and record it in
/// the gallery collection.
pub async fn upload_image(
    data: web::Data<Arc<Client>>,
    input: web::Json<GalleryUpload>,
) -> impl Responder {
    let client = data.into_inner();
    let input = input.into_inner();

    let image_service = match ImageService::new().await {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Image service unavailable: {}", err);
            return HttpResponse::ServiceUnavailable().body("Image storage unavailable");
        }
    };

    let url = match image_service.upload_image(input.image).await {
        Ok(url) => url,
        Err(err) => {
            eprintln!("Failed to upload image: {}", err);
            return HttpResponse::BadRequest().body(format!("Failed to upload image: {}", err));
        }
    };

    let record = GalleryImage {
        id: None,
        url,
        title: input.title,
        description: input.description,
        sort_order: input.sort_order,
        uploaded_at: Some(Utc::now()),
    };

    let collection: mongodb::Collection<GalleryImage> =
        client.database("Villa").collection("Gallery");

    match collection.insert_one(&record).await {
        Ok(_) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "image": record,
            "message": "Image uploaded successfully"
        })),
        Err(err) => {
            eprintln!("Failed to record gallery image: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to record gallery image")
        }
    }
}

/// Admin: remove a gallery record. The stored object is left in the bucket;
/// re-uploads never collide because object names embed a UUID.
pub async fn delete_image(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<GalleryImage> =
        client.database("Villa").collection("Gallery");

    let image_id = path.into_inner().0;
    let object_id = match ObjectId::parse_str(&image_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid image ID format"),
    };

    match collection.delete_one(doc! { "_id": object_id }).await {
        Ok(result) if result.deleted_count == 0 => {
            HttpResponse::NotFound().body("Gallery image not found")
        }
        Ok(_) => HttpResponse::Ok().body("Gallery image removed"),
        Err(err) => {
            eprintln!("Failed to delete gallery image: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete gallery image")
        }
    }
}
