use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::to_js_string;

pub const DEFAULT_DEPTH: u8 = 5;

/// Difficulty level to search depth, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthTable {
    depths: BTreeMap<i64, u8>,
    default_depth: u8,
}

impl Default for DepthTable {
    fn default() -> Self {
        Self::new([(5, 8), (6, 10), (7, 12), (8, 15)], DEFAULT_DEPTH)
    }
}

impl DepthTable {
    pub fn new(entries: impl IntoIterator<Item = (i64, u8)>, default_depth: u8) -> Self {
        Self {
            depths: entries.into_iter().collect(),
            default_depth,
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }

    pub fn depth_for_level(&self, level: i64) -> u8 {
        self.depths
            .get(&level)
            .copied()
            .unwrap_or(self.default_depth)
    }

    /// Looks up a raw JSON level by its string form, the way a string-keyed table would:
    /// `6`, `6.0`, `"6"` and `[6]` all find level 6, while `"06"` or `" 6"` get the default.
    pub fn depth_for(&self, level: &Value) -> u8 {
        match level_key(level) {
            Some(level) => self.depth_for_level(level),
            None => self.default_depth,
        }
    }
}

fn level_key(level: &Value) -> Option<i64> {
    let key = to_js_string(level);
    key.parse::<i64>().ok().filter(|n| n.to_string() == key)
}
