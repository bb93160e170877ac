use serde::{Deserialize, Serialize};

const BEST_MOVE_PREFIX: &str = "bestmove";

/// A parsed `bestmove <move> [ponder <move>]` line.
///
/// `best_move` is `None` when the engine printed a bare `bestmove` with nothing after it.
/// The move text is not checked in any way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    pub best_move: Option<String>,
    pub ponder: Option<String>,
}

/// Returns `Some` for any line starting with `bestmove`, `None` for everything else.
pub fn parse_best_move(line: &str) -> Option<BestMove> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.starts_with(BEST_MOVE_PREFIX) {
        return None;
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let best_move = parts.get(1).map(|s| s.to_string());
    let ponder = if parts.len() >= 4 && parts[2] == "ponder" {
        Some(parts[3].to_string())
    } else {
        None
    };

    Some(BestMove { best_move, ponder })
}
