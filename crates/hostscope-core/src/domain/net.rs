//! Network probe result record.

use serde::{Deserialize, Serialize};

/// Composite result of one network test run.
///
/// Each measurement independently succeeds or fails: a populated `error`
/// does not preclude populated measurement fields. `error` is `None` only
/// when every sub-measurement succeeded; otherwise it concatenates the
/// labeled failure reasons in measurement order.
///
/// Throughput figures are reference-only approximations; a timed HTTP
/// transfer is sensitive to endpoint load and path variance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetTestResult {
    /// External IP as reported by the echo service.
    pub external_ip: Option<String>,
    /// Single-request round-trip time in milliseconds.
    pub http_latency_ms: Option<f64>,
    /// Download throughput in megabits per second.
    pub download_mbps: Option<f64>,
    /// Upload throughput in megabits per second.
    pub upload_mbps: Option<f64>,
    /// Concatenated failure reasons from whichever probes failed.
    pub error: Option<String>,
}
