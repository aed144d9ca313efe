//! Mutation log entries.
//!
//! A hook returns zero or more `Mutation` values; it never touches the
//! payload directly. The Group Runner routes each entry to a
//! `PayloadAdapter` after all hooks in the group have completed
//! (`spec.md` §4.2, §4.4).
use serde::{Deserialize, Serialize};

/// The kind of change a mutation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// A declarative change to a stage payload, returned by a hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mutation {
    pub kind: MutationKind,
    pub key_path: String,
    /// The new value for `Update`; always `None` for `Delete`.
    pub value: Option<serde_json::Value>,
}

impl Mutation {
    pub fn update(key_path: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: MutationKind::Update,
            key_path: key_path.into(),
            value: Some(value),
        }
    }

    pub fn delete(key_path: impl Into<String>) -> Self {
        Self {
            kind: MutationKind::Delete,
            key_path: key_path.into(),
            value: None,
        }
    }
}
