use actix_web::{get, HttpResponse};

pub const LIVENESS_MESSAGE: &str = "Falconix Chess Server is Live! ♟️";

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
    tag = "Health"
)]
#[get("/")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}
