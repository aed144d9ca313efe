//! The Hook Invoker: runs one hook under a deadline shared with its group
//! (`spec.md` §4.3).
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rtb_hook_core::{HookAction, HookId, HookMetricsSink, HookStatus, ModuleLabels, Mutation, Stage};
use serde_json::Value;
use tracing::warn;

use crate::context::HookCallContext;
use crate::hook::HookOutput;
use crate::plan::HookBinding;

/// What the invoker captured for one hook call. Mutations are not applied
/// here — the Group Runner owns mutation ordering across the whole group.
pub struct HookInvocation {
    pub id: HookId,
    pub status: HookStatus,
    pub action: HookAction,
    pub reject_code: Option<i64>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub mutations: Vec<Mutation>,
    pub analytics_tags: Value,
    pub module_context_update: HashMap<String, Value>,
    pub execution_time: Duration,
}

pub struct HookInvoker {
    metrics: Arc<dyn HookMetricsSink>,
}

impl HookInvoker {
    pub fn new(metrics: Arc<dyn HookMetricsSink>) -> Self {
        Self { metrics }
    }

    /// Run one bound hook, racing it against `deadline`.
    pub async fn invoke<P>(
        &self,
        binding: &HookBinding<P>,
        stage: Stage,
        module_context: HashMap<String, Value>,
        payload: Arc<P>,
        deadline: Instant,
    ) -> HookInvocation
    where
        P: Send + Sync + 'static,
    {
        let start = Instant::now();
        let hook = Arc::clone(&binding.hook);
        let ctx = HookCallContext { stage, module_context };
        let handle = tokio::spawn(async move { hook.call(ctx, payload).await });

        let remaining = deadline.saturating_duration_since(Instant::now());
        let raced = tokio::time::timeout(remaining, handle).await;
        let execution_time = start.elapsed();

        let (status, action, reject_code, errors, warnings, mutations, analytics_tags, module_context_update) =
            match raced {
                Err(_elapsed) => (
                    HookStatus::Timeout,
                    HookAction::Empty,
                    None,
                    vec!["Hook execution timeout".to_string()],
                    Vec::new(),
                    Vec::new(),
                    Value::Null,
                    HashMap::new(),
                ),
                Ok(Err(join_err)) => (
                    HookStatus::ExecutionFailure,
                    HookAction::Empty,
                    None,
                    vec![panic_message(join_err)],
                    Vec::new(),
                    Vec::new(),
                    Value::Null,
                    HashMap::new(),
                ),
                Ok(Ok(Err(failure))) => (
                    HookStatus::Failure,
                    HookAction::Empty,
                    None,
                    failure.errors,
                    Vec::new(),
                    Vec::new(),
                    Value::Null,
                    HashMap::new(),
                ),
                Ok(Ok(Ok(output))) => from_output(&binding.id, stage, output),
            };

        let labels = ModuleLabels {
            module_code: &binding.id.module_code,
            hook_impl_code: &binding.id.hook_impl_code,
            stage: stage.tag(),
        };
        self.metrics.record_module_called(labels, execution_time);

        HookInvocation {
            id: binding.id.clone(),
            status,
            action,
            reject_code,
            errors,
            warnings,
            mutations,
            analytics_tags,
            module_context_update,
            execution_time,
        }
    }

    /// Records the disposition metric for one hook call. Called by the
    /// Group Runner after mutation application, since a mutation miss can
    /// downgrade `status` from what this invoker observed (`spec.md` §7).
    pub(crate) fn record_disposition(&self, labels: ModuleLabels<'_>, status: HookStatus, action: HookAction) {
        match (status, action) {
            (HookStatus::Timeout, _) => self.metrics.record_module_timeout(labels),
            (HookStatus::ExecutionFailure, _) => self.metrics.record_module_execution_error(labels),
            (HookStatus::Failure, _) => self.metrics.record_module_failed(labels),
            (HookStatus::Success, HookAction::Reject) => self.metrics.record_module_success_rejected(labels),
            (HookStatus::Success, HookAction::Update) => self.metrics.record_module_success_updated(labels),
            (HookStatus::Success, _) => self.metrics.record_module_success_nooped(labels),
        }
    }
}

#[allow(clippy::type_complexity)]
fn from_output(
    id: &HookId,
    stage: Stage,
    output: HookOutput,
) -> (HookStatus, HookAction, Option<i64>, Vec<String>, Vec<String>, Vec<Mutation>, Value, HashMap<String, Value>) {
    if output.action == HookAction::Reject {
        let code = output.reject_code.unwrap_or_default();
        let message = format!(
            "Module {} (hook: {}) rejected request with code {code} at {} stage",
            id.module_code,
            id.hook_impl_code,
            stage.tag()
        );
        let mut errors = vec![message];
        errors.extend(output.errors);
        return (
            HookStatus::Success,
            HookAction::Reject,
            Some(code),
            errors,
            output.warnings,
            output.mutations,
            output.analytics_tags,
            output.module_context_update,
        );
    }
    (
        HookStatus::Success,
        output.action,
        None,
        output.errors,
        output.warnings,
        output.mutations,
        output.analytics_tags,
        output.module_context_update,
    )
}

fn panic_message(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        warn!("hook panicked with a non-string payload");
        "hook panicked".to_string()
    }
}
