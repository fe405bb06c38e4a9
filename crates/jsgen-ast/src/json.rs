//! ESTree JSON input.
//!
//! Parsers such as acorn or esprima emit ESTree trees as JSON. Loading goes
//! through a `serde_json::Value` first so that an unrecognized `type` string
//! anywhere in the tree is reported by name, instead of surfacing as a generic
//! "unknown variant" deserialization message.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::kind::NodeKind;
use crate::node::Node;

/// Error produced while loading a tree from JSON.
#[derive(Debug)]
pub enum AstError {
    /// An object's `type` names a node kind this model does not know.
    UnknownNodeKind { kind: String },
    /// Malformed JSON, or a known kind with missing/ill-typed fields.
    Json(serde_json::Error),
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNodeKind { kind } => write!(f, "unsupported node kind `{kind}`"),
            Self::Json(err) => write!(f, "invalid ESTree JSON: {err}"),
        }
    }
}

impl std::error::Error for AstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownNodeKind { .. } => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl Node {
    /// Parse an ESTree JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, AstError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Convert an already-parsed ESTree JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, AstError> {
        if let Some(kind) = find_unknown_kind(&value) {
            tracing::debug!(kind, "rejecting tree with unknown node kind");
            return Err(AstError::UnknownNodeKind {
                kind: kind.to_string(),
            });
        }
        Ok(Self::deserialize(value)?)
    }
}

/// First `type` string in the tree (pre-order) that is not a known kind.
///
/// Objects without a string `type` (locations, regex payloads) are walked
/// through but not checked.
fn find_unknown_kind(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(kind)) = map.get("type")
                && NodeKind::from_name(kind).is_none()
            {
                return Some(kind);
            }
            map.values().find_map(find_unknown_kind)
        }
        Value::Array(items) => items.iter().find_map(find_unknown_kind),
        _ => None,
    }
}
