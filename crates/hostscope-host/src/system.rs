//! Host snapshot via `sysinfo`.

use hostscope_core::domain::{NetworkInterface, SystemInfo};
use hostscope_core::ports::HostProbePort;
use sysinfo::{Networks, System};
use tracing::{debug, warn};

use crate::gpu;

/// Production host probe.
///
/// Stateless: every [`HostProbePort::system_info`] call builds a fresh
/// `sysinfo::System` and interface snapshot, so consecutive queries never
/// see stale counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl HostProbe {
    /// Create a new host probe.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostProbePort for HostProbe {
    fn system_info(&self) -> SystemInfo {
        collect()
    }
}

/// Take a point-in-time snapshot of the host.
fn collect() -> SystemInfo {
    let sys = System::new_all();

    let cpus = sys.cpus();
    let cpu_brand = cpus
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default();

    // sysinfo reports bytes; the record carries kilobytes.
    let total_memory_kb = sys.total_memory() / 1024;
    let used_memory_kb = sys.used_memory() / 1024;
    let total_swap_kb = sys.total_swap() / 1024;
    let used_swap_kb = sys.used_swap() / 1024;

    // Flagged, not corrected: usage above total indicates a measurement
    // race between the two reads, and the record reports as measured.
    if used_memory_kb > total_memory_kb {
        warn!(used_memory_kb, total_memory_kb, "used memory exceeds total");
    }
    if used_swap_kb > total_swap_kb {
        warn!(used_swap_kb, total_swap_kb, "used swap exceeds total");
    }

    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<NetworkInterface> = networks
        .iter()
        .map(|(name, data)| NetworkInterface {
            name: name.clone(),
            received: data.total_received(),
            transmitted: data.total_transmitted(),
        })
        .collect();
    // Networks iterates in hash order; sort so repeat snapshots are stable.
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(
        interfaces = interfaces.len(),
        logical_cores = cpus.len(),
        "host snapshot collected"
    );

    SystemInfo {
        os_name: System::name(),
        hostname: System::host_name(),
        kernel_version: System::kernel_version(),
        os_version: System::os_version(),
        cpu_brand,
        cpu_physical_cores: System::physical_core_count(),
        cpu_logical_cores: cpus.len(),
        cpu_arch: std::env::consts::ARCH.to_string(),
        total_memory_kb,
        used_memory_kb,
        total_swap_kb,
        used_swap_kb,
        uptime_secs: System::uptime(),
        interfaces,
        gpus: gpu::list_gpus(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_plausible_memory_and_cores() {
        let info = HostProbe::new().system_info();

        assert!(info.total_memory_kb > 0);
        assert!(info.cpu_logical_cores > 0);
        assert!(!info.cpu_arch.is_empty());
        // used ≤ total holds on a well-behaved host; a violation is logged
        // by collect() rather than asserted here.
    }

    #[test]
    fn interfaces_are_sorted_by_name() {
        let info = HostProbe::new().system_info();
        let names: Vec<&str> = info.interfaces.iter().map(|i| i.name.as_str()).collect();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn consecutive_snapshots_agree_on_static_facts() {
        let probe = HostProbe::new();
        let first = probe.system_info();
        let second = probe.system_info();

        assert_eq!(first.os_name, second.os_name);
        assert_eq!(first.cpu_brand, second.cpu_brand);
        assert_eq!(first.cpu_logical_cores, second.cpu_logical_cores);
    }
}
