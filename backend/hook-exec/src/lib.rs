//! The hook execution engine: payload adapters, the Hook Invoker, the
//! Group Runner, the Stage Executor, and the Pipeline Orchestrator.
//!
//! `rtb_hook_core` defines the data this crate passes around; this crate
//! is the part that actually runs a plan.

pub mod context;
pub mod group_runner;
pub mod hook;
pub mod invoker;
pub mod orchestrator;
pub mod payload;
pub mod plan;
pub mod stage_executor;
pub mod testkit;

pub use context::HookCallContext;
pub use group_runner::GroupRunner;
pub use hook::{Hook, HookCallResult, HookFailure, HookOutput};
pub use invoker::{HookInvocation, HookInvoker};
pub use orchestrator::{EmptyHookExecutor, HookExecutionOrchestrator, HookExecutor, HttpRequestParts};
pub use payload::{BidRequest, EntrypointPayload, PayloadAdapter, RawAuctionPayload, User};
pub use plan::{Group, HookBinding, HookPlanBuilder, NoopHookPlanBuilder, Plan};
pub use stage_executor::StageExecutor;
pub use testkit::ClosureHook;

pub use rtb_hook_core::{
    GroupOutcome, HookAction, HookId, HookMetricsSink, HookOutcome, HookStatus, ModuleContexts,
    ModuleLabels, Mutation, MutationKind, NoopMetricsSink, RejectError, Stage, StageOutcome,
    TracingMetricsSink,
};
