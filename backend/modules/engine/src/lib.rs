use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod process;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod uci;

pub use parser::{parse_best_move, BestMove};
pub use process::{ProcessEngine, ProcessLauncher};
pub use session::{EngineSession, SessionState};
pub use uci::UciCommand;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to launch engine: {0}")]
    Launch(#[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Engine process not running")]
    NotRunning,
    #[error("Engine exited before reporting a best move")]
    Exited,
}

/// One search the session should run: the position to load and how deep to look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub fen: String,
    pub depth: u8,
}

/// Starts fresh engine instances. Every call yields an independent instance.
#[async_trait]
pub trait EngineLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn EngineHandle>, EngineError>;
}

/// A single running engine instance speaking line-oriented UCI.
#[async_trait]
pub trait EngineHandle: Send {
    /// Queue a command on the instance's input. Does not wait for any reply.
    async fn send(&mut self, command: &UciCommand) -> Result<(), EngineError>;

    /// Next line of engine output, `Ok(None)` once the output stream is closed.
    async fn next_line(&mut self) -> Result<Option<String>, EngineError>;

    /// Issue `quit` and release the instance.
    async fn terminate(&mut self) -> Result<(), EngineError>;
}
