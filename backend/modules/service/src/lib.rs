use std::sync::Arc;

use dto::moves::{MoveRequest, MoveResponse};
use engine::{EngineLauncher, EngineSession};
use error::ApiError;

pub mod coerce;
pub mod depth;
pub mod gate;

pub use depth::{DepthTable, DEFAULT_DEPTH};
pub use gate::RequestGate;

/// Answers move requests, one fresh engine instance per request.
#[derive(Clone)]
pub struct MoveService {
    gate: RequestGate,
    launcher: Arc<dyn EngineLauncher>,
}

impl MoveService {
    pub fn new(gate: RequestGate, launcher: Arc<dyn EngineLauncher>) -> Self {
        Self { gate, launcher }
    }

    pub async fn best_move(&self, request: &MoveRequest) -> Result<MoveResponse, ApiError> {
        let search = self.gate.admit(request)?;
        log::debug!("Searching depth {} for {}", search.depth, search.fen);

        let mut session = EngineSession::new(self.launcher.as_ref());
        let best = session.run(&search).await?;

        Ok(MoveResponse {
            best_move: best.best_move,
        })
    }
}
