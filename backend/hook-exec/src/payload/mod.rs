//! Capability-scoped payload wrappers (`spec.md` §4.1).
//!
//! Each stage gets exactly one adapter exposing only the mutations legal
//! for that stage. The Group Runner is the only caller of `apply`; hook
//! code never touches an adapter directly.
mod entrypoint;
mod processed_auction;
mod raw_auction;

pub use entrypoint::EntrypointPayload;
pub use processed_auction::{BidRequest, User};
pub use raw_auction::RawAuctionPayload;

use rtb_hook_core::{Mutation, MutationKind};

/// Applies one mutation to a stage's payload, or fails non-fatally.
///
/// Returns the literal debug message on success and the literal
/// mutation-miss warning on failure (`spec.md` §6). Adapters must not
/// roll back prior mutations when a later one in the same hook's list
/// fails (`spec.md` §9, commit-as-you-go).
pub trait PayloadAdapter: Clone + Send + Sync + 'static {
    fn apply(&mut self, mutation: &Mutation) -> Result<String, String>;
}

pub(crate) fn debug_message(key_path: &str, kind: MutationKind) -> String {
    format!(
        "Hook mutation successfully applied, affected key: {key_path}, mutation type: {}",
        kind.as_str()
    )
}

pub(crate) fn miss_warning() -> String {
    "failed to apply hook mutation: key not found".to_string()
}

pub(crate) fn json_value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
