/// Source positions as clang reports them in `loc` and `range`.
///
/// Every field is optional: clang omits `file` and `line` when unchanged
/// from the previously printed location, and emits `{}` for builtins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub offset: Option<u64>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub col: Option<u32>,
    pub tok_len: Option<u32>,
}

impl Location {
    /// Decode a raw `loc`-shaped value. Macro locations resolve to their
    /// expansion point, falling back to the spelling point.
    pub fn from_raw(raw: &Value) -> Option<Location> {
        let obj = raw.as_object()?;
        let target = obj
            .get("expansionLoc")
            .or_else(|| obj.get("spellingLoc"))
            .unwrap_or(raw);

        match serde_json::from_value::<Location>(target.clone()) {
            Ok(loc) if !loc.is_empty() => Some(loc),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("ignoring malformed location {}: {}", target, e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_none()
            && self.file.is_none()
            && self.line.is_none()
            && self.col.is_none()
            && self.tok_len.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRange {
    pub begin: Option<Location>,
    pub end: Option<Location>,
}

impl SourceRange {
    pub fn from_raw(raw: &Value) -> Option<SourceRange> {
        let begin = raw.get("begin").and_then(Location::from_raw);
        let end = raw.get("end").and_then(Location::from_raw);
        if begin.is_none() && end.is_none() {
            return None;
        }
        Some(SourceRange { begin, end })
    }
}
