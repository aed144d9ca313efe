//! The Pipeline Orchestrator: the public surface invoked at each pipeline
//! checkpoint (`spec.md` §4.7).
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rtb_hook_core::{HookMetricsSink, ModuleContexts, RejectError, Stage, StageOutcome};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::group_runner::GroupRunner;
use crate::invoker::HookInvoker;
use crate::payload::{BidRequest, EntrypointPayload, RawAuctionPayload};
use crate::plan::HookPlanBuilder;
use crate::stage_executor::StageExecutor;

/// The parts of an inbound HTTP request relevant to the entrypoint stage.
#[derive(Debug, Clone, Default)]
pub struct HttpRequestParts {
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

/// Public surface invoked at each checkpoint of the auction pipeline.
#[async_trait]
pub trait HookExecutor: Send + Sync {
    async fn set_account(&self, account: String);
    async fn execute_entrypoint_stage(
        &self,
        request: HttpRequestParts,
        body: Value,
    ) -> Result<Value, RejectError>;
    async fn execute_raw_auction_stage(&self, body: Value) -> Result<Value, RejectError>;
    async fn execute_processed_auction_stage(&self, bid_request: &mut BidRequest) -> Result<(), RejectError>;
    async fn get_outcomes(&self) -> Vec<StageOutcome>;
}

/// One instance per request: owns the account handle, the plan builder,
/// the module context store, and the append-only outcomes buffer.
pub struct HookExecutionOrchestrator {
    endpoint: String,
    plan_builder: Arc<dyn HookPlanBuilder>,
    metrics: Arc<dyn HookMetricsSink>,
    module_contexts: ModuleContexts,
    account: RwLock<Option<String>>,
    outcomes: Mutex<Vec<StageOutcome>>,
}

impl HookExecutionOrchestrator {
    pub fn new(
        endpoint: impl Into<String>,
        plan_builder: Arc<dyn HookPlanBuilder>,
        metrics: Arc<dyn HookMetricsSink>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            plan_builder,
            metrics,
            module_contexts: ModuleContexts::new(),
            account: RwLock::new(None),
            outcomes: Mutex::new(Vec::new()),
        }
    }

    fn stage_executor(&self) -> StageExecutor {
        let invoker = HookInvoker::new(Arc::clone(&self.metrics));
        let runner = GroupRunner::new(invoker, self.module_contexts.clone());
        StageExecutor::new(runner)
    }

    async fn account_or_default(&self) -> String {
        self.account.read().await.clone().unwrap_or_default()
    }
}

#[async_trait]
impl HookExecutor for HookExecutionOrchestrator {
    async fn set_account(&self, account: String) {
        *self.account.write().await = Some(account);
    }

    async fn execute_entrypoint_stage(
        &self,
        request: HttpRequestParts,
        body: Value,
    ) -> Result<Value, RejectError> {
        let plan = self.plan_builder.plan_for_entrypoint_stage(&self.endpoint);
        let payload = EntrypointPayload::new(request.headers, request.query, body);
        let (result, reject) = self
            .stage_executor()
            .run(&plan, Stage::Entrypoint, payload, &self.outcomes)
            .await;
        match reject {
            Some(err) => Err(err),
            None => Ok(result.body),
        }
    }

    async fn execute_raw_auction_stage(&self, body: Value) -> Result<Value, RejectError> {
        let account = self.account_or_default().await;
        let plan = self.plan_builder.plan_for_raw_auction_stage(&self.endpoint, &account);
        let payload = RawAuctionPayload::new(body);
        let (result, reject) = self
            .stage_executor()
            .run(&plan, Stage::RawAuctionRequest, payload, &self.outcomes)
            .await;
        match reject {
            Some(err) => Err(err),
            None => Ok(result.into_inner()),
        }
    }

    async fn execute_processed_auction_stage(&self, bid_request: &mut BidRequest) -> Result<(), RejectError> {
        let account = self.account_or_default().await;
        let plan = self
            .plan_builder
            .plan_for_processed_auction_stage(&self.endpoint, &account);
        let (result, reject) = self
            .stage_executor()
            .run(&plan, Stage::ProcessedAuctionRequest, bid_request.clone(), &self.outcomes)
            .await;
        // Write back regardless of reject: a stage that rejects still
        // mutates bidRequest in place up to the rejecting group
        // (`spec.md` §4.7).
        *bid_request = result;
        match reject {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn get_outcomes(&self) -> Vec<StageOutcome> {
        self.outcomes.lock().await.clone()
    }
}

/// No-op sink used when hooks are disabled: accepts every call, mutates
/// nothing, returns no rejects and no outcomes (`spec.md` §4.7).
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyHookExecutor;

#[async_trait]
impl HookExecutor for EmptyHookExecutor {
    async fn set_account(&self, _account: String) {}

    async fn execute_entrypoint_stage(
        &self,
        _request: HttpRequestParts,
        body: Value,
    ) -> Result<Value, RejectError> {
        Ok(body)
    }

    async fn execute_raw_auction_stage(&self, body: Value) -> Result<Value, RejectError> {
        Ok(body)
    }

    async fn execute_processed_auction_stage(&self, _bid_request: &mut BidRequest) -> Result<(), RejectError> {
        Ok(())
    }

    async fn get_outcomes(&self) -> Vec<StageOutcome> {
        Vec::new()
    }
}
