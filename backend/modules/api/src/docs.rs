use actix_web::{get, HttpResponse};
use utoipa::OpenApi;

use dto::moves::{ErrorResponse, MoveRequest, MoveResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Falconix Chess Server"),
    paths(crate::health::health, crate::moves::best_move),
    components(schemas(MoveRequest, MoveResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Moves", description = "Engine move search")
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
