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
            // Admin post routes
            .service(
                web::scope("/admin/posts")
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::store))
                    .route("/new", web::get().to(posts::create))
                    .route("/{slug}", web::get().to(posts::show))
                    .route("/{slug}/edit", web::get().to(posts::edit))
                    .route("/{slug}", web::put().to(posts::update))
                    .route("/{slug}", web::delete().to(posts::destroy)),
            ),
    );
}
