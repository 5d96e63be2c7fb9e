//! HTTP network prober for hostscope.
//!
//! Three fixed measurements (external IP, single-request latency, timed
//! bulk download) plus a symmetric upload probe, each attempted exactly
//! once per run and folded into one [`hostscope_core::NetTestResult`].
//! HTTP-only by design: ICMP needs elevated privileges on most platforms,
//! and a reference-quality figure does not justify them.

pub mod error;
pub mod http;
pub mod prober;

pub use error::{NetError, NetResult};
pub use http::{ProbeBackend, ReqwestBackend};
pub use prober::{NetworkProber, ProbeEndpoints};
