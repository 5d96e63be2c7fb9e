//! Port definitions (trait abstractions) for platform capabilities.
//!
//! Ports define the interfaces the core expects from the host platform.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sysinfo`/`cpal` types in any signature
//! - One production implementation per port lives in `hostscope-host`
//! - Every query is a pure point-in-time read; nothing is memoized

pub mod device_enumerator;
pub mod host_probe;

pub use device_enumerator::{AudioEnumeratorPort, CameraEnumeratorPort, DeviceError};
pub use host_probe::HostProbePort;
