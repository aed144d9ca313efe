//! The metrics contract consulted by the Hook Invoker (`spec.md` §6).
//!
//! The real sink lives outside this crate; `NoopMetricsSink` and
//! `TracingMetricsSink` are the two implementations the engine itself can
//! hand out without taking on an external metrics dependency.
use std::time::Duration;

use tracing::debug;

/// Labels attached to every metrics event for one hook invocation.
#[derive(Debug, Clone, Copy)]
pub struct ModuleLabels<'a> {
    pub module_code: &'a str,
    pub hook_impl_code: &'a str,
    pub stage: &'static str,
}

/// Receives one event per hook execution, per `spec.md` §6.
pub trait HookMetricsSink: Send + Sync {
    fn record_module_called(&self, labels: ModuleLabels<'_>, duration: Duration);
    fn record_module_success_updated(&self, labels: ModuleLabels<'_>);
    fn record_module_success_rejected(&self, labels: ModuleLabels<'_>);
    fn record_module_success_nooped(&self, labels: ModuleLabels<'_>);
    fn record_module_timeout(&self, labels: ModuleLabels<'_>);
    fn record_module_execution_error(&self, labels: ModuleLabels<'_>);
    fn record_module_failed(&self, labels: ModuleLabels<'_>);
}

/// Discards every event. Used when no metrics sink is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetricsSink;

impl HookMetricsSink for NoopMetricsSink {
    fn record_module_called(&self, _labels: ModuleLabels<'_>, _duration: Duration) {}
    fn record_module_success_updated(&self, _labels: ModuleLabels<'_>) {}
    fn record_module_success_rejected(&self, _labels: ModuleLabels<'_>) {}
    fn record_module_success_nooped(&self, _labels: ModuleLabels<'_>) {}
    fn record_module_timeout(&self, _labels: ModuleLabels<'_>) {}
    fn record_module_execution_error(&self, _labels: ModuleLabels<'_>) {}
    fn record_module_failed(&self, _labels: ModuleLabels<'_>) {}
}

/// Turns metrics events into `tracing` events, for local runs and tests
/// that want to eyeball what the engine did without standing up a real
/// metrics backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMetricsSink;

impl HookMetricsSink for TracingMetricsSink {
    fn record_module_called(&self, labels: ModuleLabels<'_>, duration: Duration) {
        debug!(
            module = labels.module_code,
            hook = labels.hook_impl_code,
            stage = labels.stage,
            duration_us = duration.as_micros() as u64,
            "module_called"
        );
    }

    fn record_module_success_updated(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_success_updated");
    }

    fn record_module_success_rejected(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_success_rejected");
    }

    fn record_module_success_nooped(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_success_nooped");
    }

    fn record_module_timeout(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_timeout");
    }

    fn record_module_execution_error(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_execution_error");
    }

    fn record_module_failed(&self, labels: ModuleLabels<'_>) {
        debug!(module = labels.module_code, hook = labels.hook_impl_code, "module_failed");
    }
}
