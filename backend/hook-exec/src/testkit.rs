//! A `Hook` implementation built from a closure, for wiring up bespoke
//! plans in tests without a new struct per hook (`spec.md` §9: "the test
//! suite injects plans directly").
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::HookCallContext;
use crate::hook::{Hook, HookCallResult};

type BoxedCall<P> =
    Box<dyn Fn(HookCallContext, Arc<P>) -> Pin<Box<dyn Future<Output = HookCallResult> + Send>> + Send + Sync>;

pub struct ClosureHook<P> {
    call: BoxedCall<P>,
}

impl<P> ClosureHook<P>
where
    P: Send + Sync + 'static,
{
    pub fn new<F, Fut>(f: F) -> Arc<dyn Hook<P>>
    where
        F: Fn(HookCallContext, Arc<P>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookCallResult> + Send + 'static,
    {
        Arc::new(Self { call: Box::new(move |ctx, payload| Box::pin(f(ctx, payload))) })
    }
}

#[async_trait]
impl<P> Hook<P> for ClosureHook<P>
where
    P: Send + Sync + 'static,
{
    async fn call(&self, ctx: HookCallContext, payload: Arc<P>) -> HookCallResult {
        (self.call)(ctx, payload).await
    }
}
