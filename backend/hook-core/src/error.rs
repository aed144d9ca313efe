//! The sole terminal signal a stage can raise (`spec.md` §3, §7).
use thiserror::Error;

use crate::ids::HookId;

/// A hook asked to terminate the auction. This is the only error type that
/// propagates out of a stage; every other failure mode is confined to the
/// outcome log (`spec.md` §7).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Module {} (hook: {}) rejected request with code {code} at {stage_name} stage", hook_id.module_code, hook_id.hook_impl_code)]
pub struct RejectError {
    pub code: i64,
    pub hook_id: HookId,
    pub stage_name: &'static str,
}

impl RejectError {
    pub fn new(code: i64, hook_id: HookId, stage_name: &'static str) -> Self {
        Self { code, hook_id, stage_name }
    }
}
