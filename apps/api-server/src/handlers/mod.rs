//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/like/{id}", web::post().to(posts::like))
                    .route("/unlike/{id}", web::post().to(posts::unlike))
                    .route("/comment/{id}", web::post().to(posts::comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(posts::uncomment),
                    )
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::delete().to(posts::delete)),
            ),
    );
}
