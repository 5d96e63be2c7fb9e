//! Device enumeration ports: audio and camera discovery.
//!
//! Both enumerations are point-in-time snapshots via the platform's
//! device-discovery facility, not live subscriptions. A failure of the
//! platform call itself propagates as [`DeviceError`], and the caller shows
//! nothing for that section rather than partial or stale data. Empty
//! lists, by contrast, are a successful result: no devices present.

use thiserror::Error;

use crate::domain::AudioDevices;

/// Errors raised when a platform enumeration call cannot complete.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The platform device-discovery call failed (driver unavailable,
    /// permission denied, probe tool missing).
    #[error("device enumeration failed: {0}")]
    Enumeration(String),
}

/// Port for enumerating audio devices.
pub trait AudioEnumeratorPort: Send + Sync {
    /// List currently attached input/output devices and the platform
    /// defaults. Default fields are `None` when no default is designated.
    fn list_audio_devices(&self) -> Result<AudioDevices, DeviceError>;
}

/// Port for enumerating cameras.
pub trait CameraEnumeratorPort: Send + Sync {
    /// List names of currently attached cameras.
    fn list_cameras(&self) -> Result<Vec<String>, DeviceError>;
}
