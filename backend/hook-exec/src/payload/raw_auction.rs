//! Raw-auction-stage payload: opaque JSON bytes (`spec.md` §4.1, §6).
use rtb_hook_core::{Mutation, MutationKind};
use serde_json::Value;

use super::{debug_message, miss_warning, PayloadAdapter};

/// The raw auction request body. Key paths are top-level JSON keys.
#[derive(Debug, Clone, Default)]
pub struct RawAuctionPayload(pub Value);

impl RawAuctionPayload {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl PayloadAdapter for RawAuctionPayload {
    fn apply(&mut self, mutation: &Mutation) -> Result<String, String> {
        let Some(map) = self.0.as_object_mut() else {
            return Err(miss_warning());
        };
        match mutation.kind {
            MutationKind::Update => {
                let value = mutation.value.clone().ok_or_else(miss_warning)?;
                map.insert(mutation.key_path.clone(), value);
                Ok(debug_message(&mutation.key_path, mutation.kind))
            }
            MutationKind::Delete => {
                if map.remove(&mutation.key_path).is_some() {
                    Ok(debug_message(&mutation.key_path, mutation.kind))
                } else {
                    Err(miss_warning())
                }
            }
        }
    }
}
