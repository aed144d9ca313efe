//! Entrypoint-stage payload: HTTP headers, query parameters, and a raw
//! JSON body (`spec.md` §4.1, §6).
use std::collections::HashMap;

use rtb_hook_core::{Mutation, MutationKind};
use serde_json::Value;

use super::{debug_message, json_value_to_string, miss_warning, PayloadAdapter};

/// Mutable view of an inbound HTTP request at the entrypoint checkpoint.
///
/// Key paths: `header:<Name>` and `query:<name>` address the respective
/// maps; `body.<key>` addresses a top-level key of the JSON body.
#[derive(Debug, Clone, Default)]
pub struct EntrypointPayload {
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Value,
}

impl EntrypointPayload {
    pub fn new(headers: HashMap<String, String>, query: HashMap<String, String>, body: Value) -> Self {
        Self { headers, query, body }
    }
}

impl PayloadAdapter for EntrypointPayload {
    fn apply(&mut self, mutation: &Mutation) -> Result<String, String> {
        if let Some(name) = mutation.key_path.strip_prefix("header:") {
            return apply_map(&mut self.headers, name, mutation);
        }
        if let Some(name) = mutation.key_path.strip_prefix("query:") {
            return apply_map(&mut self.query, name, mutation);
        }
        if let Some(key) = mutation.key_path.strip_prefix("body.") {
            return apply_body(&mut self.body, key, mutation);
        }
        Err(miss_warning())
    }
}

fn apply_map(map: &mut HashMap<String, String>, name: &str, mutation: &Mutation) -> Result<String, String> {
    match mutation.kind {
        MutationKind::Update => {
            let value = mutation.value.as_ref().ok_or_else(miss_warning)?;
            map.insert(name.to_string(), json_value_to_string(value));
            Ok(debug_message(&mutation.key_path, mutation.kind))
        }
        MutationKind::Delete => {
            if map.remove(name).is_some() {
                Ok(debug_message(&mutation.key_path, mutation.kind))
            } else {
                Err(miss_warning())
            }
        }
    }
}

fn apply_body(body: &mut Value, key: &str, mutation: &Mutation) -> Result<String, String> {
    let Some(map) = body.as_object_mut() else {
        return Err(miss_warning());
    };
    match mutation.kind {
        MutationKind::Update => {
            let value = mutation.value.clone().ok_or_else(miss_warning)?;
            map.insert(key.to_string(), value);
            Ok(debug_message(&mutation.key_path, mutation.kind))
        }
        MutationKind::Delete => {
            if map.remove(key).is_some() {
                Ok(debug_message(&mutation.key_path, mutation.kind))
            } else {
                Err(miss_warning())
            }
        }
    }
}
