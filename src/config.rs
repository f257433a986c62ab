/// Decode Configuration
///
/// Knobs for turning a raw dump into a `ParsedUnit`. Every field has a
/// default, so a partial JSON file (or `{}`) is a valid configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::width::{WidthOracle, DEFAULT_POINTER_WIDTH};

/// Deepest AST level accepted by default. Text input of this depth still
/// parses comfortably on a default-sized thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Width reported for pointer types, in bytes.
    pub pointer_width: u32,
    /// Records nested deeper than this fail with `DecodeError::TooDeep`.
    pub max_depth: usize,
    /// Field names probed, in order, for a record's child list.
    pub children_fields: Vec<String>,
    /// Roll back a malformed child subtree and keep decoding its siblings
    /// instead of failing the whole dump.
    pub recover_malformed: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            pointer_width: DEFAULT_POINTER_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
            children_fields: vec!["inner".to_string(), "children".to_string()],
            recover_malformed: false,
        }
    }
}

impl DecodeConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse decode config")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn oracle(&self) -> WidthOracle {
        WidthOracle::new(self.pointer_width)
    }
}
