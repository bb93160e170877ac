use crate::parser::{parse_best_move, BestMove};
use crate::{EngineError, EngineLauncher, SearchRequest, UciCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Starting,
    Running,
    Resolved,
    Failed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Failed)
    }
}

/// Drives exactly one engine instance through one search.
///
/// The instance is launched, handed `uci`, `position fen ..` and `go depth ..` back to back,
/// and the first output line starting with `bestmove` settles the session. Anything the
/// engine prints after that is never looked at. There is no deadline: an engine that stays
/// alive without ever printing `bestmove` keeps the session waiting.
pub struct EngineSession<'a> {
    launcher: &'a dyn EngineLauncher,
    state: SessionState,
}

impl<'a> EngineSession<'a> {
    pub fn new(launcher: &'a dyn EngineLauncher) -> Self {
        Self {
            launcher,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub async fn run(&mut self, request: &SearchRequest) -> Result<BestMove, EngineError> {
        if self.state != SessionState::Uninitialized {
            return Err(EngineError::NotRunning);
        }

        self.state = SessionState::Starting;
        let mut handle = match self.launcher.launch().await {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("Engine failed to start: {}", e);
                self.state = SessionState::Failed;
                return Err(e);
            }
        };

        let commands = [
            UciCommand::Uci,
            UciCommand::PositionFen(request.fen.clone()),
            UciCommand::GoDepth(request.depth),
        ];
        for command in &commands {
            if let Err(e) = handle.send(command).await {
                log::error!("Failed to send `{}` to engine: {}", command, e);
                self.state = SessionState::Failed;
                return Err(e);
            }
        }
        self.state = SessionState::Running;

        loop {
            let line = match handle.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    log::error!("Engine output closed before bestmove");
                    self.state = SessionState::Failed;
                    return Err(EngineError::Exited);
                }
                Err(e) => {
                    log::error!("Failed to read engine output: {}", e);
                    self.state = SessionState::Failed;
                    return Err(e);
                }
            };

            if let Some(best_move) = self.observe(&line) {
                log::info!(
                    "Engine answered {:?} at depth {}",
                    best_move.best_move,
                    request.depth
                );
                if let Err(e) = handle.terminate().await {
                    log::warn!("Failed to quit engine: {}", e);
                }
                return Ok(best_move);
            }
        }
    }

    /// Feeds one output line to the session. Only the first `bestmove` line seen while
    /// running resolves it; every later line is dropped.
    fn observe(&mut self, line: &str) -> Option<BestMove> {
        if self.state != SessionState::Running {
            return None;
        }
        let best_move = parse_best_move(line)?;
        self.state = SessionState::Resolved;
        Some(best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptEnd, ScriptedLauncher};
    use std::time::Duration;

    fn request(depth: u8) -> SearchRequest {
        SearchRequest {
            fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
            depth,
        }
    }

    #[tokio::test]
    async fn test_commands_sent_in_order() {
        let launcher = ScriptedLauncher::new(vec!["bestmove e2e4 ponder e7e5"]);
        let mut session = EngineSession::new(&launcher);
        session.run(&request(10)).await.unwrap();

        assert_eq!(
            launcher.commands(),
            vec![
                "uci".to_string(),
                "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
                "go depth 10".to_string(),
                "quit".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_resolves_on_first_bestmove() {
        let launcher = ScriptedLauncher::new(vec![
            "id name Stub",
            "uciok",
            "info depth 1 score cp 20 pv e2e4",
            "bestmove e2e4 ponder e7e5",
        ]);
        let mut session = EngineSession::new(&launcher);
        let best = session.run(&request(8)).await.unwrap();

        assert_eq!(best.best_move.as_deref(), Some("e2e4"));
        assert_eq!(best.ponder.as_deref(), Some("e7e5"));
        assert_eq!(session.state(), SessionState::Resolved);
        assert_eq!(launcher.launches(), 1);
    }

    #[tokio::test]
    async fn test_later_bestmove_lines_ignored() {
        let launcher = ScriptedLauncher::new(vec![
            "bestmove e2e4 ponder e7e5",
            "bestmove d2d4 ponder d7d5",
        ]);
        let mut session = EngineSession::new(&launcher);
        let best = session.run(&request(5)).await.unwrap();

        assert_eq!(best.best_move.as_deref(), Some("e2e4"));
        assert_eq!(launcher.terminations(), 1);
        assert_eq!(
            launcher.commands().iter().filter(|c| c.as_str() == "quit").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_observe_after_resolution_drops_line() {
        let launcher = ScriptedLauncher::new(Vec::<&str>::new());
        let mut session = EngineSession::new(&launcher);
        session.state = SessionState::Running;

        assert!(session.observe("info depth 3").is_none());
        assert_eq!(session.state(), SessionState::Running);
        assert!(session.observe("bestmove a2a3").is_some());
        assert!(session.observe("bestmove b2b3").is_none());
        assert_eq!(session.state(), SessionState::Resolved);
    }

    #[tokio::test]
    async fn test_bare_bestmove_resolves_without_move() {
        let launcher = ScriptedLauncher::new(vec!["bestmove"]);
        let mut session = EngineSession::new(&launcher);
        let best = session.run(&request(5)).await.unwrap();

        assert_eq!(best.best_move, None);
        assert_eq!(launcher.terminations(), 1);
    }

    #[tokio::test]
    async fn test_launch_failure_sends_nothing() {
        let launcher = ScriptedLauncher::failing();
        let mut session = EngineSession::new(&launcher);
        let result = session.run(&request(5)).await;

        assert!(matches!(result, Err(EngineError::Launch(_))));
        assert_eq!(session.state(), SessionState::Failed);
        assert!(launcher.commands().is_empty());
        assert_eq!(launcher.terminations(), 0);
    }

    #[tokio::test]
    async fn test_stream_end_without_bestmove_fails() {
        let launcher = ScriptedLauncher::new(vec!["info depth 1"]).ending_with(ScriptEnd::Close);
        let mut session = EngineSession::new(&launcher);
        let result = session.run(&request(5)).await;

        assert!(matches!(result, Err(EngineError::Exited)));
        assert_eq!(session.state(), SessionState::Failed);
        assert!(session.state().is_terminal());
    }

    #[tokio::test]
    async fn test_silent_engine_never_resolves() {
        // No deadline exists; a live engine that never answers keeps the session pending.
        let launcher = ScriptedLauncher::new(vec!["info depth 1"]).ending_with(ScriptEnd::Hang);
        let mut session = EngineSession::new(&launcher);
        let outcome =
            tokio::time::timeout(Duration::from_millis(100), session.run(&request(5))).await;

        assert!(outcome.is_err());
        assert_eq!(launcher.terminations(), 0);
    }

    #[tokio::test]
    async fn test_session_runs_only_once() {
        let launcher = ScriptedLauncher::new(vec!["bestmove e2e4"]);
        let mut session = EngineSession::new(&launcher);
        session.run(&request(5)).await.unwrap();

        assert!(matches!(
            session.run(&request(5)).await,
            Err(EngineError::NotRunning)
        ));
        assert_eq!(launcher.launches(), 1);
    }
}
