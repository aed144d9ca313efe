//! The read-only context handed to a hook at call time (`spec.md` §4.3).
use std::collections::HashMap;

use rtb_hook_core::Stage;
use serde_json::Value;

/// Everything a hook sees besides its payload: which stage it is running
/// in, and a snapshot of its own module's cross-stage context.
#[derive(Debug, Clone)]
pub struct HookCallContext {
    pub stage: Stage,
    pub module_context: HashMap<String, Value>,
}
