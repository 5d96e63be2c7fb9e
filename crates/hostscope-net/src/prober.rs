//! The network prober: four sequential sub-measurements, one record.
//!
//! Each sub-measurement is attempted exactly once and produces its own
//! `Result`; the results are combined at the end so a failing probe never
//! aborts the ones after it. Timing happens here, around the backend
//! calls, with `std::time::Instant`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use hostscope_core::domain::NetTestResult;
use tracing::{info, warn};
use url::Url;

use crate::error::NetResult;
use crate::http::{ProbeBackend, ReqwestBackend};

/// Upload probe payload size: 500 KB of zeros.
const UPLOAD_PAYLOAD_BYTES: usize = 500_000;

/// The fixed endpoints a probe run talks to.
///
/// Not user-configurable: the defaults are the probe surface. The
/// constructor exists so tests can point the prober at fakes.
#[derive(Debug, Clone)]
pub struct ProbeEndpoints {
    /// Plain-text external IP echo service.
    pub ip_echo: Url,
    /// Small fixed response for the round-trip measurement.
    pub latency: Url,
    /// Endpoint serving a ~3 MB payload.
    pub download: Url,
    /// Endpoint accepting an arbitrary POST body.
    pub upload: Url,
}

impl ProbeEndpoints {
    /// Parse a set of endpoint URLs.
    pub fn new(ip_echo: &str, latency: &str, download: &str, upload: &str) -> NetResult<Self> {
        Ok(Self {
            ip_echo: Url::parse(ip_echo)?,
            latency: Url::parse(latency)?,
            download: Url::parse(download)?,
            upload: Url::parse(upload)?,
        })
    }
}

impl Default for ProbeEndpoints {
    fn default() -> Self {
        Self::new(
            "https://api.ipify.org",
            "https://www.gstatic.com/generate_204",
            "https://speed.cloudflare.com/__down?bytes=3000000",
            "https://speed.cloudflare.com/__up",
        )
        .expect("default endpoints parse")
    }
}

/// Network prober over an injectable transfer backend.
///
/// Stateless between runs; concurrent `run` calls are independent and
/// assemble their own result records.
pub struct NetworkProber {
    backend: Arc<dyn ProbeBackend>,
    endpoints: ProbeEndpoints,
}

impl NetworkProber {
    /// Create a prober with the production backend and default endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(Arc::new(ReqwestBackend::new()), ProbeEndpoints::default())
    }

    /// Create a prober over a specific backend and endpoint set.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn ProbeBackend>, endpoints: ProbeEndpoints) -> Self {
        Self { backend, endpoints }
    }

    /// Run the full probe sequence.
    ///
    /// Never fails as a call: sub-measurement failures are folded into the
    /// record's `error` field while the remaining probes still run.
    pub async fn run(&self) -> NetTestResult {
        info!("network test started");

        let ip = self.lookup_ip().await;
        let latency = self.measure_latency().await;
        let download = self.measure_download().await;
        let upload = self.measure_upload().await;

        let result = combine(ip, latency, download, upload);
        info!(clean = result.error.is_none(), "network test finished");
        result
    }

    async fn lookup_ip(&self) -> NetResult<String> {
        let body = self.backend.get_text(&self.endpoints.ip_echo).await?;
        Ok(body.trim().to_string())
    }

    async fn measure_latency(&self) -> NetResult<f64> {
        let start = Instant::now();
        self.backend.get_bytes(&self.endpoints.latency).await?;
        Ok(start.elapsed().as_secs_f64() * 1000.0)
    }

    async fn measure_download(&self) -> NetResult<f64> {
        let start = Instant::now();
        let bytes = self.backend.get_bytes(&self.endpoints.download).await?;
        Ok(compute_mbps(bytes, start.elapsed()))
    }

    async fn measure_upload(&self) -> NetResult<f64> {
        let payload = vec![0u8; UPLOAD_PAYLOAD_BYTES];
        let start = Instant::now();
        let sent = self.backend.post_bytes(&self.endpoints.upload, payload).await?;
        Ok(compute_mbps(sent, start.elapsed()))
    }
}

impl Default for NetworkProber {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the four tagged results into one record, concatenating labeled
/// failure reasons in measurement order.
fn combine(
    ip: NetResult<String>,
    latency: NetResult<f64>,
    download: NetResult<f64>,
    upload: NetResult<f64>,
) -> NetTestResult {
    let mut failures = Vec::new();

    let external_ip = field("ip lookup", ip, &mut failures);
    let http_latency_ms = field("latency", latency, &mut failures);
    let download_mbps = field("download", download, &mut failures);
    let upload_mbps = field("upload", upload, &mut failures);

    NetTestResult {
        external_ip,
        http_latency_ms,
        download_mbps,
        upload_mbps,
        error: (!failures.is_empty()).then(|| failures.join("; ")),
    }
}

fn field<T>(label: &str, result: NetResult<T>, failures: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(probe = label, error = %e, "sub-measurement failed");
            failures.push(format!("{label}: {e}"));
            None
        }
    }
}

/// Megabits per second over a timed transfer.
fn compute_mbps(bytes: u64, elapsed: Duration) -> f64 {
    // Clamp: a sub-millisecond transfer would divide by ~zero.
    let secs = elapsed.as_secs_f64().max(0.001);
    #[allow(clippy::cast_precision_loss)]
    let bits = bytes as f64 * 8.0;
    bits / (secs * 1_000_000.0)
}
