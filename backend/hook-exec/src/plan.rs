//! Plans, groups, and the plan-builder contract (`spec.md` §3, §4.8).
use std::sync::Arc;
use std::time::Duration;

use rtb_hook_core::HookId;

use crate::hook::Hook;
use crate::payload::{BidRequest, EntrypointPayload, RawAuctionPayload};

/// A `HookId` paired with the callable it is bound to for one stage.
pub struct HookBinding<P> {
    pub id: HookId,
    pub hook: Arc<dyn Hook<P>>,
}

impl<P> HookBinding<P> {
    pub fn new(id: HookId, hook: Arc<dyn Hook<P>>) -> Self {
        Self { id, hook }
    }
}

impl<P> Clone for HookBinding<P> {
    fn clone(&self) -> Self {
        Self { id: self.id.clone(), hook: Arc::clone(&self.hook) }
    }
}

/// A set of hooks executed concurrently under one shared deadline.
pub struct Group<P> {
    pub timeout: Duration,
    pub hooks: Vec<HookBinding<P>>,
}

impl<P> Group<P> {
    pub fn new(timeout: Duration, hooks: Vec<HookBinding<P>>) -> Self {
        Self { timeout, hooks }
    }
}

/// The ordered list of groups for one stage. An empty plan is valid.
pub struct Plan<P> {
    pub groups: Vec<Group<P>>,
}

impl<P> Plan<P> {
    pub fn new(groups: Vec<Group<P>>) -> Self {
        Self { groups }
    }

    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// External contract: selects the plan for a stage and an account. Kept
/// behind a trait so tests can inject bespoke plans directly, per
/// `spec.md` §9.
pub trait HookPlanBuilder: Send + Sync {
    fn plan_for_entrypoint_stage(&self, endpoint: &str) -> Plan<EntrypointPayload>;
    fn plan_for_raw_auction_stage(&self, endpoint: &str, account: &str) -> Plan<RawAuctionPayload>;
    fn plan_for_processed_auction_stage(&self, endpoint: &str, account: &str) -> Plan<BidRequest>;
}

/// Returns empty groups for every stage. The builder every plan-building
/// policy must still be accepted as equivalent to (`spec.md` §4.8).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHookPlanBuilder;

impl HookPlanBuilder for NoopHookPlanBuilder {
    fn plan_for_entrypoint_stage(&self, _endpoint: &str) -> Plan<EntrypointPayload> {
        Plan::empty()
    }

    fn plan_for_raw_auction_stage(&self, _endpoint: &str, _account: &str) -> Plan<RawAuctionPayload> {
        Plan::empty()
    }

    fn plan_for_processed_auction_stage(&self, _endpoint: &str, _account: &str) -> Plan<BidRequest> {
        Plan::empty()
    }
}
