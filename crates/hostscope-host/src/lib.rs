//! Local host adapters for hostscope.
//!
//! Production implementations of the `hostscope-core` ports:
//!
//! - [`HostProbe`]: system snapshot via `sysinfo`
//! - [`CpalAudioEnumerator`]: audio device discovery via `cpal`
//! - [`PlatformCameraEnumerator`]: camera discovery via the platform's
//!   probe facility (`system_profiler`, CIM, sysfs)
//!
//! Every adapter re-reads the host on each call; nothing here holds state.

pub mod audio;
pub mod camera;
pub mod gpu;
pub mod system;

pub use audio::CpalAudioEnumerator;
pub use camera::PlatformCameraEnumerator;
pub use system::HostProbe;
