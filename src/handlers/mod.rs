//! HTTP handlers and route configuration.

mod posts;

pub use posts::{create_post, get_post};

use actix_web::{web, HttpResponse};

/// Configure all routes for the application.
///
/// Shared by `main` and the test suites so both exercise the same table.
/// `/posts/create` must be registered before `/posts/{id}` so the literal
/// segment wins.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts/create", web::post().to(create_post))
        .route("/posts/{id}", web::get().to(get_post))
        .route("/ping", web::get().to(ping))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics));
}

/// Liveness endpoint.
async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "post-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
