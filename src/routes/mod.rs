use actix_web::web;

pub mod accommodation;
pub mod account;
pub mod admin;
pub mod booking;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod health;
pub mod pricing;

/// Full route table, shared by the server binary and the integration tests.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));
    cfg.service(
        web::scope("/api")
            // Public routes
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(account::auth::signup))
                    .route("/signin", web::post().to(account::auth::signin))
                    .service(
                        web::scope("")
                            .wrap(crate::middleware::auth::AuthMiddleware)
                            .route("/session", web::get().to(account::auth::user_session)),
                    ),
            )
            // Admin console (JWT + admin role)
            .configure(admin::config)
            .service(
                web::scope("")
                    .route(
                        "/accommodations",
                        web::get().to(accommodation::get_accommodations),
                    )
                    .route("/pricing/quote", web::get().to(pricing::get_quote))
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(booking::create_booking))
                            .route("/{id}", web::get().to(booking::get_booking)),
                    )
                    .service(
                        web::scope("/contact")
                            .route("", web::post().to(contact::submit_contact))
                            .route("", web::get().to(contact::contact_info)),
                    )
                    .route("/gallery", web::get().to(gallery::get_gallery))
                    .service(
                        web::scope("/content")
                            .route("", web::get().to(content::get_all_content))
                            .route("/{id}", web::get().to(content::get_content)),
                    ),
            ),
    );
}
