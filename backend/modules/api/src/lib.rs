use actix_web::{error::JsonPayloadError, web};
use error::ApiError;

pub mod docs;
pub mod health;
pub mod moves;

/// Registers every route and the JSON body limits on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::health)
        .service(moves::best_move)
        .service(docs::openapi_json);
}

/// Malformed bodies are answered in the same `{ "error": .. }` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected move request body: {}", err);
        body_error(err).into()
    })
}

/// A request that carries no JSON at all (wrong content type, or an empty body) has no
/// `fen` or `level` either, so it gets the missing-input answer. Broken JSON does not.
pub fn body_error(err: JsonPayloadError) -> ApiError {
    match err {
        JsonPayloadError::ContentType => ApiError::MissingInput,
        JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
            ApiError::MissingInput
        }
        other => ApiError::InvalidBody(other.to_string()),
    }
}
