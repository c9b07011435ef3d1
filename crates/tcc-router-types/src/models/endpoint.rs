//! Candidate service instances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reachable service instance as exposed by the transport layer.
///
/// Identity for routing purposes is the `(host, port)` pair. Transports that
/// distinguish a configured host name from the resolved IP override [`ip`];
/// pinned routing compares against the IP, participant affinity against the host.
///
/// [`ip`]: Invoker::ip
pub trait Invoker {
    fn host(&self) -> &str;

    fn port(&self) -> u16;

    /// Resolved address of the instance. Defaults to [`Invoker::host`].
    fn ip(&self) -> &str {
        self.host()
    }

    /// `host:port` with the host's case preserved.
    fn address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}

impl<T: Invoker + ?Sized> Invoker for &T {
    fn host(&self) -> &str {
        (**self).host()
    }

    fn port(&self) -> u16 {
        (**self).port()
    }

    fn ip(&self) -> &str {
        (**self).ip()
    }
}

impl<T: Invoker + ?Sized> Invoker for std::sync::Arc<T> {
    fn host(&self) -> &str {
        (**self).host()
    }

    fn port(&self) -> u16 {
        (**self).port()
    }

    fn ip(&self) -> &str {
        (**self).ip()
    }
}

/// Plain `(host, port)` endpoint, optionally carrying a resolved IP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port, ip: None }
    }

    /// Attach the resolved IP used for pinned-target matching.
    #[must_use]
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }
}

impl Invoker for Endpoint {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn ip(&self) -> &str {
        self.ip.as_deref().unwrap_or(&self.host)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
