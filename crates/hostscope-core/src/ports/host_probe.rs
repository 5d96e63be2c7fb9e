//! Host probe port: the system information snapshot.

use crate::domain::SystemInfo;

/// Port for reading a snapshot of host facts.
///
/// Implementations re-read the host on every call: host state is mutable
/// outside this system's control, so caching a snapshot would only
/// introduce staleness. The query always succeeds: facts the platform
/// cannot determine come back as `None` fields, never as an error.
pub trait HostProbePort: Send + Sync {
    /// Take a fresh snapshot of the host.
    fn system_info(&self) -> SystemInfo;
}
