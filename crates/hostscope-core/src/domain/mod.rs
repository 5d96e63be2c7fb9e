//! Domain records returned by the diagnostic queries.
//!
//! All records are plain data: immutable once constructed, created fresh on
//! every query, serialized camelCase across the Tauri IPC boundary. Nothing
//! here is cached or persisted.

pub mod devices;
pub mod host;
pub mod net;

pub use devices::AudioDevices;
pub use host::{GpuDevice, NetworkInterface, SystemInfo};
pub use net::NetTestResult;
