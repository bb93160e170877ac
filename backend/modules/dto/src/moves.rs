use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /api/move`.
///
/// Both fields are kept as raw JSON so the gate can decide what counts as present:
/// `null`, `false`, `0` and `""` are treated the same as a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MoveRequest {
    /// Board position in Forsyth-Edwards Notation
    #[serde(default)]
    #[schema(value_type = String, example = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")]
    pub fen: Option<Value>,
    /// Difficulty, 5 through 8; anything else searches at the default depth
    #[serde(default)]
    #[schema(value_type = i64, example = 6)]
    pub level: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MoveResponse {
    /// Absent when the engine reported `bestmove` without a move
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "e7e5")]
    pub best_move: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_fields_default_to_none() {
        let req: MoveRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.fen.is_none());
        assert!(req.level.is_none());

        let req: MoveRequest = serde_json::from_value(json!({ "fen": null, "level": "7" })).unwrap();
        assert!(req.fen.is_none());
        assert_eq!(req.level, Some(json!("7")));
    }

    #[test]
    fn test_move_response_shape() {
        let body = serde_json::to_value(MoveResponse { best_move: Some("e2e4".to_string()) }).unwrap();
        assert_eq!(body, json!({ "move": "e2e4" }));

        let body = serde_json::to_value(MoveResponse { best_move: None }).unwrap();
        assert_eq!(body, json!({}));
    }
}
