//! Routing decision counters.
//!
//! Recorded through the `metrics` facade; the host process installs whatever
//! recorder/exporter it uses. Without one, recording is a no-op.

use metrics::{counter, describe_counter};

/// Register metric descriptions. Call once after installing a recorder.
pub fn describe_router_metrics() {
    describe_counter!(
        "tcc_router_decisions_total",
        "Invoker selections by path (pinned/ordinary) and outcome"
    );
    describe_counter!(
        "tcc_router_policy_resolutions_total",
        "Fallback policy resolution attempts by configured name and result"
    );
}

/// Labels: path = "pinned" | "ordinary", outcome = "exact" | "affinity" | "fallback" | "not_found" | "no_candidates" | "no_policy" | "policy_error"
pub(crate) fn record_decision(path: &'static str, outcome: &'static str) {
    counter!("tcc_router_decisions_total", "path" => path, "outcome" => outcome).increment(1);
}

/// Labels: policy = configured name, result = "resolved" | "missing"
pub(crate) fn record_policy_resolution(policy: &str, result: &'static str) {
    counter!(
        "tcc_router_policy_resolutions_total",
        "policy" => policy.to_string(),
        "result" => result
    )
    .increment(1);
}
