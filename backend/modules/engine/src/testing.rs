//! Scripted stand-in for a real engine binary, for tests that need to see what a
//! session sends and control what it reads back.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::{EngineError, EngineHandle, EngineLauncher, UciCommand};

/// What a scripted engine does once its lines run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEnd {
    /// Keep the stream open and never print again.
    Hang,
    /// Close the output stream, like a process that exited.
    Close,
}

#[derive(Default)]
struct Recorder {
    launches: AtomicUsize,
    terminations: AtomicUsize,
    commands: Mutex<Vec<String>>,
}

impl Recorder {
    fn record(&self, command: String) {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command);
    }
}

/// Launcher whose every instance replays the same output after receiving `go`.
#[derive(Clone)]
pub struct ScriptedLauncher {
    lines: Vec<String>,
    end: ScriptEnd,
    fail_launch: bool,
    recorder: Arc<Recorder>,
}

impl ScriptedLauncher {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            end: ScriptEnd::Hang,
            fail_launch: false,
            recorder: Arc::new(Recorder::default()),
        }
    }

    /// A launcher whose instances can never be started.
    pub fn failing() -> Self {
        Self {
            fail_launch: true,
            ..Self::new(Vec::<String>::new())
        }
    }

    pub fn ending_with(mut self, end: ScriptEnd) -> Self {
        self.end = end;
        self
    }

    /// Launch attempts so far, including failed ones.
    pub fn launches(&self) -> usize {
        self.recorder.launches.load(Ordering::SeqCst)
    }

    pub fn terminations(&self) -> usize {
        self.recorder.terminations.load(Ordering::SeqCst)
    }

    /// Every command text received, across all instances, in arrival order.
    pub fn commands(&self) -> Vec<String> {
        self.recorder
            .commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl EngineLauncher for ScriptedLauncher {
    async fn launch(&self) -> Result<Box<dyn EngineHandle>, EngineError> {
        self.recorder.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(EngineError::Launch(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "scripted engine refused to start",
            )));
        }
        Ok(Box::new(ScriptedEngine {
            pending: self.lines.iter().cloned().collect(),
            end: self.end,
            searching: false,
            quit: false,
            recorder: Arc::clone(&self.recorder),
        }))
    }
}

struct ScriptedEngine {
    pending: VecDeque<String>,
    end: ScriptEnd,
    searching: bool,
    quit: bool,
    recorder: Arc<Recorder>,
}

#[async_trait]
impl EngineHandle for ScriptedEngine {
    async fn send(&mut self, command: &UciCommand) -> Result<(), EngineError> {
        if self.quit {
            return Err(EngineError::NotRunning);
        }
        if matches!(command, UciCommand::GoDepth(_)) {
            self.searching = true;
        }
        self.recorder.record(command.to_string());
        Ok(())
    }

    async fn next_line(&mut self) -> Result<Option<String>, EngineError> {
        if self.searching {
            if let Some(line) = self.pending.pop_front() {
                return Ok(Some(line));
            }
            if self.end == ScriptEnd::Close {
                return Ok(None);
            }
        }
        std::future::pending::<()>().await;
        Ok(None)
    }

    async fn terminate(&mut self) -> Result<(), EngineError> {
        self.send(&UciCommand::Quit).await?;
        self.quit = true;
        self.recorder.terminations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
