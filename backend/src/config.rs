use std::env;
use std::fmt;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_ENGINE_PATH: &str = "stockfish";

#[derive(Debug)]
pub enum ConfigError {
    InvalidWorkers(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkers(v) => write!(f, "WORKERS must be a positive integer, got {:?}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub engine_path: String,
    pub engine_args: Vec<String>,
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let workers = match non_empty("WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => None,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            engine_path: non_empty("ENGINE_PATH").unwrap_or_else(|| DEFAULT_ENGINE_PATH.to_string()),
            engine_args: non_empty("ENGINE_ARGS")
                .map(|args| args.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = assert_ok!(ServerConfig::from_lookup(lookup(&[])));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert_eq!(config.engine_path, "stockfish");
        assert!(config.engine_args.is_empty());
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_overrides() {
        let config = assert_ok!(ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ENGINE_PATH", "/usr/games/stockfish"),
            ("ENGINE_ARGS", "--threads 2"),
            ("WORKERS", "4"),
        ])));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.engine_path, "/usr/games/stockfish");
        assert_eq!(config.engine_args, vec!["--threads", "2"]);
        assert_eq!(config.workers, Some(4));
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = assert_ok!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])));
        assert_eq!(config.port, DEFAULT_PORT);

        let config = assert_ok!(ServerConfig::from_lookup(lookup(&[("PORT", "")])));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_bad_workers_rejected() {
        assert_err!(ServerConfig::from_lookup(lookup(&[("WORKERS", "0")])));
        assert_err!(ServerConfig::from_lookup(lookup(&[("WORKERS", "many")])));
    }
}
