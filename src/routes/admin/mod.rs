use actix_web::web;

use crate::middleware::auth::AuthMiddleware;
use crate::middleware::role_auth::RequireRole;
use crate::models::account::UserRole;
use crate::routes::{booking, contact, content, gallery};

/// Admin console endpoints: every save path for content, pricing, media and
/// the CRM views sits behind the JWT check plus an explicit admin capability
/// check, never behind a client-side flag.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(AuthMiddleware)
            .route("/content", web::put().to(content::update_content))
            .route("/pricing", web::get().to(content::get_discount_settings))
            .route("/pricing", web::put().to(content::update_discount_settings))
            .route("/gallery/upload", web::post().to(gallery::upload_image))
            .route("/gallery/{id}", web::delete().to(gallery::delete_image))
            .route("/bookings", web::get().to(booking::list_bookings))
            .route("/contacts", web::get().to(contact::list_submissions)),
    );
}
