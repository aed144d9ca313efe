//! Stage and hook identifiers.
//!
//! Mirrors the `(moduleCode, hookImplCode)` pair from `spec.md` §3 and the
//! stage tag constants from §6.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one hook instance within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookId {
    pub module_code: String,
    pub hook_impl_code: String,
}

impl HookId {
    pub fn new(module_code: impl Into<String>, hook_impl_code: impl Into<String>) -> Self {
        Self {
            module_code: module_code.into(),
            hook_impl_code: hook_impl_code.into(),
        }
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.module_code, self.hook_impl_code)
    }
}

/// A pipeline checkpoint at which hooks may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Entrypoint,
    RawAuctionRequest,
    ProcessedAuctionRequest,
}

impl Stage {
    /// The literal stage tag used in outcomes and reject-error messages.
    pub fn tag(self) -> &'static str {
        match self {
            Stage::Entrypoint => "entrypoint",
            Stage::RawAuctionRequest => "raw_auction_request",
            Stage::ProcessedAuctionRequest => "processed_auction_request",
        }
    }

    /// The entity tag recorded on a `StageOutcome` for this stage.
    pub fn entity(self) -> &'static str {
        match self {
            Stage::Entrypoint => "http-request",
            Stage::RawAuctionRequest | Stage::ProcessedAuctionRequest => "auction-request",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
