use tokio::process::{Command, Child, ChildStdin, ChildStdout};
use tokio::io::{BufReader, AsyncBufReadExt, AsyncWriteExt};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use crate::{EngineError, EngineHandle, EngineLauncher, UciCommand};

/// How long a quitting engine gets to exit on its own before it is killed.
const QUIT_GRACE: Duration = Duration::from_secs(2);

/// Spawns a UCI engine binary as a child process for every launch.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl EngineLauncher for ProcessLauncher {
    async fn launch(&self) -> Result<Box<dyn EngineHandle>, EngineError> {
        let engine = ProcessEngine::spawn(&self.program, &self.args)?;
        Ok(Box::new(engine))
    }
}

pub struct ProcessEngine {
    child: Option<Child>,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    buf: Vec<u8>,
}

impl ProcessEngine {
    pub fn spawn(program: &Path, args: &[String]) -> Result<Self, EngineError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(EngineError::Launch)?;

        let stdin = child.stdin.take().ok_or(EngineError::NotRunning)?;
        let stdout = child.stdout.take().ok_or(EngineError::NotRunning)?;

        log::debug!("Spawned engine {} (pid {:?})", program.display(), child.id());

        Ok(Self {
            child: Some(child),
            stdin,
            stdout: BufReader::new(stdout),
            buf: Vec::new(),
        })
    }

    async fn write_line(&mut self, text: &str) -> Result<(), EngineError> {
        if self.child.is_none() {
            return Err(EngineError::NotRunning);
        }
        self.stdin.write_all(format!("{}\n", text).as_bytes()).await?;
        self.stdin.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl EngineHandle for ProcessEngine {
    async fn send(&mut self, command: &UciCommand) -> Result<(), EngineError> {
        self.write_line(&command.to_string()).await
    }

    async fn next_line(&mut self) -> Result<Option<String>, EngineError> {
        // Engines may print arbitrary bytes in id/info lines; only the bestmove prefix matters.
        self.buf.clear();
        if self.stdout.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).trim_end().to_string()))
    }

    async fn terminate(&mut self) -> Result<(), EngineError> {
        self.write_line(&UciCommand::Quit.to_string()).await?;

        // Reap in the background so the caller is not held up by engine shutdown.
        if let Some(mut child) = self.child.take() {
            tokio::spawn(async move {
                match tokio::time::timeout(QUIT_GRACE, child.wait()).await {
                    Ok(Ok(status)) => log::debug!("Engine exited with {}", status),
                    Ok(Err(e)) => log::warn!("Failed to wait for engine exit: {}", e),
                    Err(_) => {
                        log::warn!("Engine ignored quit, killing it");
                        let _ = child.kill().await;
                    }
                }
            });
        }
        Ok(())
    }
}

impl Drop for ProcessEngine {
    fn drop(&mut self) {
        // Best effort to kill a child that was never told to quit
        if let Some(child) = self.child.as_mut() {
            let _ = child.start_kill();
        }
    }
}
