//! Post handlers - HTTP endpoints for post operations.

use crate::db::NewPost;
use crate::error::{AppError, Result};
use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};
use crate::models::CreatePostRequest;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Get a post by ID.
///
/// The path segment is parsed before the service is invoked, so malformed
/// identifiers never reach storage.
pub async fn get_post(
    service: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let _timer = HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&["get_post"])
        .start_timer();

    let raw = path.into_inner();
    let id = parse_post_id(&raw).map_err(|err| {
        tracing::error!(operation = "get_post", id = %raw, error = %err, "invalid post id");
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["get_post", "error"])
            .inc();
        err
    })?;

    match service.get_by_id(id).await {
        Ok(post) => {
            HTTP_REQUESTS_TOTAL
                .with_label_values(&["get_post", "ok"])
                .inc();
            Ok(HttpResponse::Ok().json(post))
        }
        Err(err) => {
            HTTP_REQUESTS_TOTAL
                .with_label_values(&["get_post", "error"])
                .inc();
            Err(err)
        }
    }
}

/// Create a new post, responding with the assigned identifier.
pub async fn create_post(
    service: web::Data<PostService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let _timer = HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&["create_post"])
        .start_timer();

    let req: CreatePostRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(operation = "create_post", error = %e, "invalid request body");
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["create_post", "error"])
            .inc();
        AppError::Validation(format!("invalid request body: {}", e))
    })?;

    req.validate().map_err(|e| {
        tracing::error!(operation = "create_post", error = %e, "validation failed");
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["create_post", "error"])
            .inc();
        AppError::Validation(e.to_string())
    })?;

    match service
        .create(NewPost {
            author_id: req.author_id,
            body: req.body,
        })
        .await
    {
        Ok(id) => {
            HTTP_REQUESTS_TOTAL
                .with_label_values(&["create_post", "ok"])
                .inc();
            Ok(HttpResponse::Ok().json(id))
        }
        Err(err) => {
            HTTP_REQUESTS_TOTAL
                .with_label_values(&["create_post", "error"])
                .inc();
            Err(err)
        }
    }
}

fn parse_post_id(raw: &str) -> Result<i64> {
    let id: i64 = raw
        .parse()
        .map_err(|e| AppError::Validation(format!("invalid post id {:?}: {}", raw, e)))?;
    if id < 0 {
        return Err(AppError::Validation(format!(
            "invalid post id {}: must be non-negative",
            id
        )));
    }
    Ok(id)
}
