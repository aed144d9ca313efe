//! Processed-auction-stage payload: a typed OpenRTB-style bid request
//! (`spec.md` §4.1, §6). Only the sub-paths named in the spec are
//! addressable; anything else is a mutation miss.
use rtb_hook_core::{Mutation, MutationKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{debug_message, miss_warning, PayloadAdapter};

/// A minimal OpenRTB-shaped bid request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BidRequest {
    pub id: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub yob: Option<i64>,
    pub gender: Option<String>,
    pub consent: Option<String>,
}

impl PayloadAdapter for BidRequest {
    fn apply(&mut self, mutation: &Mutation) -> Result<String, String> {
        match mutation.key_path.as_str() {
            "user.yob" => apply_user_field(self, mutation, |u| &mut u.yob, |v| v.as_i64()),
            "user.consent" => apply_user_field(self, mutation, |u| &mut u.consent, value_as_string),
            "user.id" => apply_user_field(self, mutation, |u| &mut u.id, value_as_string),
            "user.gender" => apply_user_field(self, mutation, |u| &mut u.gender, value_as_string),
            _ => Err(miss_warning()),
        }
    }
}

fn value_as_string(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn apply_user_field<T>(
    bid_request: &mut BidRequest,
    mutation: &Mutation,
    field: impl Fn(&mut User) -> &mut Option<T>,
    parse: impl Fn(&Value) -> Option<T>,
) -> Result<String, String> {
    match mutation.kind {
        MutationKind::Update => {
            let raw = mutation.value.as_ref().ok_or_else(miss_warning)?;
            let parsed = parse(raw).ok_or_else(miss_warning)?;
            let user = bid_request.user.get_or_insert_with(User::default);
            *field(user) = Some(parsed);
            Ok(debug_message(&mutation.key_path, mutation.kind))
        }
        MutationKind::Delete => {
            let Some(user) = bid_request.user.as_mut() else {
                return Err(miss_warning());
            };
            let slot = field(user);
            if slot.take().is_some() {
                Ok(debug_message(&mutation.key_path, mutation.kind))
            } else {
                Err(miss_warning())
            }
        }
    }
}
