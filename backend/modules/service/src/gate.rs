use dto::moves::MoveRequest;
use engine::SearchRequest;
use error::ApiError;
use crate::coerce::{is_truthy, to_js_string};
use crate::depth::DepthTable;

/// Turns a raw move request into a search, or rejects it before any engine is involved.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    depths: DepthTable,
}

impl RequestGate {
    pub fn new(depths: DepthTable) -> Self {
        Self { depths }
    }

    pub fn depths(&self) -> &DepthTable {
        &self.depths
    }

    pub fn admit(&self, request: &MoveRequest) -> Result<SearchRequest, ApiError> {
        let (fen, level) = match (&request.fen, &request.level) {
            (Some(fen), Some(level)) if is_truthy(fen) && is_truthy(level) => (fen, level),
            _ => return Err(ApiError::MissingInput),
        };

        Ok(SearchRequest {
            fen: to_js_string(fen),
            depth: self.depths.depth_for(level),
        })
    }
}
