//! The immutable outcome model returned to observability (`spec.md` §3, §6).
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ids::HookId;

/// What a hook asked the executor to do.
///
/// `Empty` serializes to `""`, matching the literal `action ∈ {none,
/// update, reject, ""}` from `spec.md` §6: a hook whose status is
/// `failure` or `timeout` produced no action at all, which is distinct
/// from a successful hook that explicitly did nothing (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookAction {
    #[default]
    None,
    Update,
    Reject,
    #[serde(rename = "")]
    Empty,
}

impl HookAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HookAction::None => "none",
            HookAction::Update => "update",
            HookAction::Reject => "reject",
            HookAction::Empty => "",
        }
    }
}

/// The disposition of one hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookStatus {
    Success,
    ExecutionFailure,
    Failure,
    Timeout,
}

impl HookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HookStatus::Success => "success",
            HookStatus::ExecutionFailure => "execution-failure",
            HookStatus::Failure => "failure",
            HookStatus::Timeout => "timeout",
        }
    }
}

/// What the Hook Invoker / Group Runner recorded for one hook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookOutcome {
    pub hook_id: HookId,
    pub status: HookStatus,
    pub action: HookAction,
    pub reject_code: Option<i64>,
    pub message: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub debug_messages: Vec<String>,
    pub analytics_tags: serde_json::Value,
    pub execution_time: Duration,
}

/// The wall-clock duration and per-hook results of one executed group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOutcome {
    pub execution_time: Duration,
    pub hooks: Vec<HookOutcome>,
}

/// The full record of one stage execution, appended once per non-empty plan.
///
/// `Serialize`-only: the `&'static str` fields can't satisfy a derived
/// `Deserialize` for an arbitrary caller-chosen lifetime, and nothing reads
/// this log back in.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutcome {
    pub entity: &'static str,
    pub stage: &'static str,
    pub execution_time: Duration,
    pub groups: Vec<GroupOutcome>,
}
