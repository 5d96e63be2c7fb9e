//! Tauri command handlers.
//!
//! One module per diagnostic concern:
//! - system: host snapshot (OS, CPU, memory, uptime, interfaces, GPUs)
//! - devices: audio and camera enumeration
//! - net: the network probe
//!
//! Commands are thin: they delegate to the wired adapters and map
//! component errors to `String` at the IPC boundary.

pub mod devices;
pub mod net;
pub mod system;
