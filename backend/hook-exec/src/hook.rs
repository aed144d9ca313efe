//! The hook callable contract (`spec.md` §4.3).
//!
//! Hooks are invoked on their own `tokio` task (see `invoker.rs`), so the
//! trait itself stays a plain `async fn` — panic isolation and the
//! deadline race are the invoker's job, not the hook's.
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rtb_hook_core::{HookAction, Mutation};
use serde_json::Value;

use crate::context::HookCallContext;

/// What a hook returns when it runs to completion without a hard failure.
#[derive(Debug, Clone, Default)]
pub struct HookOutput {
    pub mutations: Vec<Mutation>,
    pub action: HookAction,
    pub reject_code: Option<i64>,
    /// Non-fatal errors surfaced by a hook that still completed (`spec.md`
    /// §4.3 step 4) — independent of `HookFailure`, which aborts the call.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub analytics_tags: Value,
    pub module_context_update: HashMap<String, Value>,
}

impl HookOutput {
    pub fn none() -> Self {
        Self { action: HookAction::None, ..Default::default() }
    }

    pub fn update(mutations: Vec<Mutation>) -> Self {
        Self { mutations, action: HookAction::Update, ..Default::default() }
    }

    pub fn reject(code: i64) -> Self {
        Self { action: HookAction::Reject, reject_code: Some(code), ..Default::default() }
    }

    pub fn with_analytics(mut self, tags: Value) -> Self {
        self.analytics_tags = tags;
        self
    }

    pub fn with_module_context(mut self, update: HashMap<String, Value>) -> Self {
        self.module_context_update = update;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

/// A hard, hook-reported failure (`spec.md` §4.3 step 7): distinct from a
/// panic, which the invoker catches separately via `JoinError::is_panic`.
#[derive(Debug, Clone)]
pub struct HookFailure {
    pub errors: Vec<String>,
}

impl HookFailure {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

pub type HookCallResult = Result<HookOutput, HookFailure>;

/// One hook implementation, bound to a stage's payload type `P`.
#[async_trait]
pub trait Hook<P>: Send + Sync + 'static
where
    P: Send + Sync + 'static,
{
    async fn call(&self, ctx: HookCallContext, payload: Arc<P>) -> HookCallResult;
}
