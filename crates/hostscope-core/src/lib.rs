//! Core domain types and port definitions for hostscope.
//!
//! This crate is pure: it owns the records that cross the IPC boundary and
//! the traits the adapters implement. No `sysinfo`, `cpal`, or HTTP types
//! appear in any signature here.

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{AudioDevices, GpuDevice, NetTestResult, NetworkInterface, SystemInfo};
pub use ports::{AudioEnumeratorPort, CameraEnumeratorPort, DeviceError, HostProbePort};
