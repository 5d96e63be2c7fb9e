//! Host snapshot records: OS identity, CPU, memory, uptime, interfaces.

use serde::{Deserialize, Serialize};

/// A network interface with its cumulative traffic counters.
///
/// Counters are monotonic for the lifetime of the host's network stack;
/// this system never resets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Interface name as reported by the OS (e.g. `"en0"`, `"eth0"`).
    pub name: String,
    /// Cumulative bytes received since the interface came up.
    pub received: u64,
    /// Cumulative bytes transmitted since the interface came up.
    pub transmitted: u64,
}

/// A display adapter visible to the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuDevice {
    /// Adapter model name.
    pub name: String,
    /// Vendor string, `"Unknown"` when the platform does not report one.
    pub vendor: String,
    /// Human-readable VRAM size, if the platform reports it.
    pub vram: Option<String>,
}

/// Point-in-time snapshot of static and dynamic host facts.
///
/// Fields the platform cannot determine are `None`, never a sentinel.
/// The `used ≤ total` relations are reported as measured, not enforced:
/// a violation indicates a measurement race on the host, not invalid data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// OS name (e.g. `"macOS"`, `"Ubuntu"`).
    pub os_name: Option<String>,
    /// Host name.
    pub hostname: Option<String>,
    /// Kernel version string.
    pub kernel_version: Option<String>,
    /// OS version string.
    pub os_version: Option<String>,
    /// CPU brand string; may be empty when the platform reports none.
    pub cpu_brand: String,
    /// Physical core count, when the platform can determine it.
    pub cpu_physical_cores: Option<usize>,
    /// Logical core count.
    pub cpu_logical_cores: usize,
    /// Target architecture (e.g. `"aarch64"`, `"x86_64"`).
    pub cpu_arch: String,
    /// Total memory in kilobytes.
    pub total_memory_kb: u64,
    /// Used memory in kilobytes.
    pub used_memory_kb: u64,
    /// Total swap in kilobytes.
    pub total_swap_kb: u64,
    /// Used swap in kilobytes.
    pub used_swap_kb: u64,
    /// Seconds since boot (process-independent).
    pub uptime_secs: u64,
    /// All visible network interfaces, ordered by name.
    pub interfaces: Vec<NetworkInterface>,
    /// Display adapters; empty when detection is unavailable on this host.
    pub gpus: Vec<GpuDevice>,
}
