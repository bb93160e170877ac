use std::fmt;

/// Commands this service sends to an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    PositionFen(String),
    GoDepth(u8),
    Quit,
}

impl fmt::Display for UciCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uci => write!(f, "uci"),
            // One command per line; anything after a line break is dropped.
            Self::PositionFen(fen) => {
                let fen = fen.split(['\r', '\n']).next().unwrap_or_default();
                write!(f, "position fen {}", fen)
            }
            Self::GoDepth(depth) => write!(f, "go depth {}", depth),
            Self::Quit => write!(f, "quit"),
        }
    }
}
