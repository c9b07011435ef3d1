//! Call metadata handed through to fallback policies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Describes the outbound call being routed.
///
/// The router itself only forwards this to the fallback policy; policies use it
/// for per-method state (round-robin) or stable hashing (consistent hash).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invocation {
    /// Interface / service name
    pub service: String,
    /// Method name
    pub method: String,
    /// Stable key derived from the call arguments, used for hash-based policies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_key: Option<String>,
    /// Free-form attachments propagated with the call
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attachments: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            argument_key: None,
            attachments: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_argument_key(mut self, key: impl Into<String>) -> Self {
        self.argument_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attachments.insert(key.into(), value.into());
        self
    }

    /// `service.method`, the unit per-method policy state is keyed on.
    pub fn method_key(&self) -> String {
        format!("{}.{}", self.service, self.method)
    }

    /// Key for hash-based selection: the argument key when present, else the method key.
    pub fn hash_key(&self) -> String {
        self.argument_key.clone().unwrap_or_else(|| self.method_key())
    }
}
