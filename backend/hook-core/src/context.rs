//! Process-per-request module context store (`spec.md` §3, §4.6).
//!
//! Shared across all stages of one request, never across requests. Merges
//! are serialized through the lock; the engine does not promise that a
//! concurrently-running hook in the *same* group observes a sibling's
//! update (`spec.md` §5, §9 open question).
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

type ModuleMap = HashMap<String, Value>;

/// `moduleCode -> (key -> value)`, created empty per request.
#[derive(Debug, Default, Clone)]
pub struct ModuleContexts {
    inner: Arc<RwLock<HashMap<String, ModuleMap>>>,
}

impl ModuleContexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a read-only snapshot of one module's sub-map, as handed to a
    /// hook by the Hook Invoker. Empty if the module has no entry yet.
    pub async fn snapshot(&self, module_code: &str) -> ModuleMap {
        let map = self.inner.read().await;
        map.get(module_code).cloned().unwrap_or_default()
    }

    /// Merge a hook's `moduleContextUpdate` into its module's sub-map.
    /// Keys not mentioned are preserved; mentioned keys are overwritten.
    pub async fn merge(&self, module_code: &str, updates: ModuleMap) {
        if updates.is_empty() {
            return;
        }
        let mut map = self.inner.write().await;
        let entry = map.entry(module_code.to_string()).or_default();
        debug!(module = module_code, keys = updates.len(), "merging module context update");
        for (key, value) in updates {
            entry.insert(key, value);
        }
    }
}
