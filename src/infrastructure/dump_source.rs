use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::domain::decode::parse_dump;
use crate::ports::DumpSource;

/// A dump previously written to disk, e.g. by
/// `clang -fsyntax-only -Xclang -ast-dump=json file.c > file.json`.
pub struct JsonFileSource {
    path: PathBuf,
    max_depth: usize,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Nesting bound for parsing; match it to the decode config's `max_depth`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DumpSource for JsonFileSource {
    fn load(&self) -> Result<Value> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to open dump {}", self.path.display()))?;
        let raw = parse_dump(&text, self.max_depth)
            .with_context(|| format!("Failed to parse dump {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "loaded dump");
        Ok(raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dump text already held in memory.
pub struct JsonTextSource {
    label: String,
    text: String,
    max_depth: usize,
}

impl JsonTextSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl DumpSource for JsonTextSource {
    fn load(&self) -> Result<Value> {
        parse_dump(&self.text, self.max_depth).with_context(|| format!("Failed to parse dump {}", self.label))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
