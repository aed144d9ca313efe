//! The Stage Executor: walks one stage's groups sequentially, short-
//! circuiting on rejection (`spec.md` §4.5).
use std::time::Instant;

use rtb_hook_core::{RejectError, Stage, StageOutcome};
use tokio::sync::Mutex;

use crate::group_runner::GroupRunner;
use crate::payload::PayloadAdapter;
use crate::plan::Plan;

pub struct StageExecutor {
    runner: GroupRunner,
}

impl StageExecutor {
    pub fn new(runner: GroupRunner) -> Self {
        Self { runner }
    }

    /// Run `plan` against `payload`. An empty plan is a no-op: no outcome
    /// is appended and the payload returns unchanged (`spec.md` P1).
    ///
    /// Always returns the payload, mutated by every group that ran before
    /// a reject (if any) — a reject does not discard earlier groups'
    /// mutations (`spec.md` §4.5 step 4, §4.7).
    pub async fn run<P>(
        &self,
        plan: &Plan<P>,
        stage: Stage,
        mut payload: P,
        outcomes: &Mutex<Vec<StageOutcome>>,
    ) -> (P, Option<RejectError>)
    where
        P: PayloadAdapter,
    {
        if plan.is_empty() {
            return (payload, None);
        }

        let stage_start = Instant::now();
        let mut group_outcomes = Vec::with_capacity(plan.groups.len());
        let mut reject = None;

        for group in &plan.groups {
            let (group_outcome, group_reject) = self.runner.run(group, stage, &mut payload).await;
            group_outcomes.push(group_outcome);
            if let Some(err) = group_reject {
                reject = Some(err);
                break;
            }
        }

        let stage_outcome = StageOutcome {
            entity: stage.entity(),
            stage: stage.tag(),
            execution_time: stage_start.elapsed(),
            groups: group_outcomes,
        };
        outcomes.lock().await.push(stage_outcome);

        (payload, reject)
    }
}
