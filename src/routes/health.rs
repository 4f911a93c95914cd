use actix_web::{web, HttpResponse, Responder};
use google_cloud_storage::client::{Client as GcsClient, ClientConfig};
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check MongoDB connection
    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    // Check JWT configuration (key existence only)
    let jwt_result = check_jwt_secret();
    health.services.insert("jwt".to_string(), jwt_result.clone());

    // Check Cloud Storage connection (gallery bucket)
    let cloud_storage_result = check_cloud_storage().await;
    health
        .services
        .insert("cloud_storage".to_string(), cloud_storage_result.clone());

    // Determine overall status (if any service is not ok, the overall status is degraded)
    if mongo_result.status != "ok"
        || jwt_result.status != "ok"
        || cloud_storage_result.status != "ok"
    {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client.database("Villa").run_command(doc! {"ping": 1}).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            // Log error for internal visibility
            eprintln!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_jwt_secret() -> ServiceStatus {
    match env::var("JWT_SECRET") {
        Ok(key) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("JWT secret configured ({})", masked_key)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("JWT_SECRET not configured".to_string()),
        },
    }
}

async fn check_cloud_storage() -> ServiceStatus {
    let gallery_bucket = match env::var("GALLERY_BUCKET") {
        Ok(bucket) => bucket,
        Err(_) => {
            return ServiceStatus {
                status: "error".to_string(),
                details: Some("Missing bucket configuration: GALLERY_BUCKET".to_string()),
            };
        }
    };

    // Create Google Cloud Storage client
    let client_config = match ClientConfig::default().with_auth().await {
        Ok(config) => config,
        Err(e) => {
            return ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to initialize GCS client config: {}", e)),
            };
        }
    };

    let gcs_client = GcsClient::new(client_config);

    // Create a list request for the bucket with a limit of 1 object
    let list_request = ListObjectsRequest {
        bucket: gallery_bucket.clone(),
        max_results: Some(1),
        ..Default::default()
    };

    // Test the connection by trying to list objects
    match gcs_client.list_objects(&list_request).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Connected to Cloud Storage: gallery bucket '{}' accessible",
                gallery_bucket
            )),
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Failed to access Cloud Storage bucket: {}", e)),
        },
    }
}
