//! Error types for decoding dumps and querying parsed units.
//!
//! Structural decode failures carry a slash-separated tree path, e.g.
//! `TranslationUnitDecl#0x1/inner[5]/FunctionDecl#0x2`, pointing at the
//! fragment that could not be decoded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// A node position held something other than a JSON object.
    #[error("expected a node record at {path}, found {found}")]
    NotARecord { path: String, found: String },

    /// A mandatory field (`id`, `kind`) is missing.
    #[error("node at {path} has no `{field}` field")]
    MissingField { path: String, field: &'static str },

    /// A mandatory field has the wrong shape.
    #[error("field `{field}` of node at {path} must be {expected}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
    },

    /// The children field is present but not a list.
    #[error("children of {kind} node {id} at {path} are not a list")]
    MalformedChildren { path: String, id: String, kind: String },

    /// Nesting exceeded the configured bound.
    #[error("nesting deeper than {limit} levels at {path}")]
    TooDeep { path: String, limit: usize },

    /// The dump text is not valid JSON.
    #[error("dump is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Tree path of the offending fragment, if the failure is structural.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::NotARecord { path, .. }
            | DecodeError::MissingField { path, .. }
            | DecodeError::InvalidField { path, .. }
            | DecodeError::MalformedChildren { path, .. }
            | DecodeError::TooDeep { path, .. } => Some(path),
            DecodeError::Json(_) => None,
        }
    }
}

/// Failure of a positional accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no {list} available")]
    Empty { list: &'static str },

    #[error("{list} index {index} out of range (len {len})")]
    OutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
}

/// Shared positional lookup: distinguishes an empty list from an index past
/// the end.
pub(crate) fn pick<T: Copy>(items: &[T], index: usize, list: &'static str) -> Result<T, LookupError> {
    if items.is_empty() {
        return Err(LookupError::Empty { list });
    }
    items.get(index).copied().ok_or(LookupError::OutOfRange {
        list,
        index,
        len: items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_distinguishes_empty() {
        let none: [u8; 0] = [];
        assert_eq!(pick(&none, 0, "functions"), Err(LookupError::Empty { list: "functions" }));
        assert_eq!(
            pick(&[1u8, 2], 2, "functions"),
            Err(LookupError::OutOfRange { list: "functions", index: 2, len: 2 })
        );
        assert_eq!(pick(&[1u8, 2], 1, "functions"), Ok(2));
    }

    #[test]
    fn test_decode_error_path() {
        let err = DecodeError::MissingField {
            path: "TranslationUnitDecl#0x1/inner[0]".to_string(),
            field: "kind",
        };
        assert_eq!(err.path(), Some("TranslationUnitDecl#0x1/inner[0]"));
        assert!(err.to_string().contains("`kind`"));
    }
}
