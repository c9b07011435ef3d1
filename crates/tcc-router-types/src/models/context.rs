//! Per-call routing signals: pinned routing context and participant snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Invoker, ResourceAddress};

/// Pinned target for a call that is itself a step of an in-flight transactional
/// exchange (confirm/cancel toward a previously enlisted participant).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RoutingContext {
    pub host: String,
    pub port: u16,
}

impl RoutingContext {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    /// Exact match: case-sensitive on the invoker's IP, equal port.
    pub fn is_target<I: Invoker + ?Sized>(&self, invoker: &I) -> bool {
        invoker.ip() == self.host && invoker.port() == self.port
    }
}

impl fmt::Display for RoutingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Point-in-time view of the resource identifiers enlisted in the active local
/// transaction. Empty when no transaction is active.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ParticipantSnapshot {
    identifiers: Vec<String>,
}

impl ParticipantSnapshot {
    pub fn new(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Addresses of the well-formed identifiers, in enlistment order.
    pub fn addresses(&self) -> Vec<ResourceAddress> {
        self.identifiers.iter().filter_map(|id| ResourceAddress::parse(id)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ParticipantSnapshot {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { identifiers: iter.into_iter().map(Into::into).collect() }
    }
}

impl From<Vec<String>> for ParticipantSnapshot {
    fn from(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}
