//! The Group Runner: executes one group under a shared deadline, applies
//! its mutations in declared plan order (`spec.md` §4.4), and records each
//! hook's disposition metric against its final, post-mutation status.
use std::sync::Arc;
use std::time::Instant;

use rtb_hook_core::{
    GroupOutcome, HookAction, HookOutcome, HookStatus, ModuleContexts, ModuleLabels, RejectError, Stage,
};

use crate::invoker::HookInvoker;
use crate::payload::PayloadAdapter;
use crate::plan::Group;

pub struct GroupRunner {
    invoker: HookInvoker,
    module_contexts: ModuleContexts,
}

impl GroupRunner {
    pub fn new(invoker: HookInvoker, module_contexts: ModuleContexts) -> Self {
        Self { invoker, module_contexts }
    }

    /// Run every hook in `group` concurrently, then apply mutations in
    /// plan order regardless of completion order (`spec.md` §4.4, P2).
    pub async fn run<P>(&self, group: &Group<P>, stage: Stage, payload: &mut P) -> (GroupOutcome, Option<RejectError>)
    where
        P: PayloadAdapter,
    {
        let group_start = Instant::now();
        let deadline = group_start + group.timeout;
        let snapshot = Arc::new(payload.clone());

        let invocations = futures::future::join_all(group.hooks.iter().map(|binding| {
            let snapshot = Arc::clone(&snapshot);
            let module_contexts = self.module_contexts.clone();
            async move {
                let module_context = module_contexts.snapshot(&binding.id.module_code).await;
                self.invoker.invoke(binding, stage, module_context, snapshot, deadline).await
            }
        }))
        .await;

        let mut rejected = false;
        let mut reject_error = None;
        let mut hook_outcomes = Vec::with_capacity(invocations.len());

        for invocation in invocations {
            self.module_contexts
                .merge(&invocation.id.module_code, invocation.module_context_update.clone())
                .await;

            let mut status = invocation.status;
            let mut warnings = invocation.warnings.clone();
            let mut debug_messages = Vec::new();

            if status == HookStatus::Success && invocation.action == HookAction::Update && !rejected {
                let mut any_mutation_failed = false;
                for mutation in &invocation.mutations {
                    match payload.apply(mutation) {
                        Ok(debug) => debug_messages.push(debug),
                        Err(warning) => {
                            warnings.push(warning);
                            any_mutation_failed = true;
                        }
                    }
                }
                if any_mutation_failed {
                    status = HookStatus::ExecutionFailure;
                }
            }

            if status == HookStatus::Success && invocation.action == HookAction::Reject {
                rejected = true;
                reject_error = Some(RejectError::new(
                    invocation.reject_code.unwrap_or_default(),
                    invocation.id.clone(),
                    stage.tag(),
                ));
            }

            let labels = ModuleLabels {
                module_code: &invocation.id.module_code,
                hook_impl_code: &invocation.id.hook_impl_code,
                stage: stage.tag(),
            };
            self.invoker.record_disposition(labels, status, invocation.action);

            hook_outcomes.push(HookOutcome {
                hook_id: invocation.id,
                status,
                action: invocation.action,
                reject_code: invocation.reject_code,
                message: None,
                errors: invocation.errors,
                warnings,
                debug_messages,
                analytics_tags: invocation.analytics_tags,
                execution_time: invocation.execution_time,
            });
        }

        let outcome = GroupOutcome { execution_time: group_start.elapsed(), hooks: hook_outcomes };
        (outcome, reject_error)
    }
}
