use actix_web::{post, web, HttpResponse};

use dto::moves::{ErrorResponse, MoveRequest, MoveResponse};
use error::ApiError;
use service::MoveService;

/// Ask the engine for a move
///
/// Starts a dedicated engine for this request, searches the given position at the depth
/// mapped from `level`, and answers with the engine's best move. The request stays open
/// until the engine reports one.
#[utoipa::path(
    post,
    path = "/api/move",
    request_body = MoveRequest,
    responses(
        (status = 200, description = "Engine picked a move", body = MoveResponse),
        (status = 400, description = "FEN or level missing, or body unreadable", body = ErrorResponse),
        (status = 500, description = "Engine failed to start or died mid-search", body = ErrorResponse)
    ),
    tag = "Moves"
)]
#[post("/api/move")]
pub async fn best_move(
    service: web::Data<MoveService>,
    payload: web::Json<MoveRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = service.best_move(&payload).await?;
    Ok(HttpResponse::Ok().json(response))
}
