//! Data model shared by the hook execution engine.
//!
//! This crate has no notion of *running* a hook — that lives in
//! `rtb-hook-exec`. It only defines the values the engine passes around:
//! stage/hook identifiers, mutations, outcomes, the reject signal, the
//! module context store, and the metrics contract.

pub mod context;
pub mod error;
pub mod ids;
pub mod metrics;
pub mod mutation;
pub mod outcome;

pub use context::ModuleContexts;
pub use error::RejectError;
pub use ids::{HookId, Stage};
pub use metrics::{HookMetricsSink, ModuleLabels, NoopMetricsSink, TracingMetricsSink};
pub use mutation::{Mutation, MutationKind};
pub use outcome::{GroupOutcome, HookAction, HookOutcome, HookStatus, StageOutcome};
