//! Application state shared across all Tauri commands.

use std::sync::Arc;

use hostscope_core::ports::{AudioEnumeratorPort, CameraEnumeratorPort, HostProbePort};
use hostscope_host::{CpalAudioEnumerator, HostProbe, PlatformCameraEnumerator};
use hostscope_net::NetworkProber;

/// Application state with the wired platform adapters.
///
/// This struct is managed by Tauri and accessible to all commands via
/// `tauri::State<'_, AppState>`. Adapters are stateless, so sharing them
/// across concurrent commands needs no synchronization beyond `Arc`.
pub struct AppState {
    /// Host snapshot probe (sysinfo-backed)
    pub host: Arc<dyn HostProbePort>,
    /// Audio device enumerator (cpal-backed)
    pub audio: Arc<dyn AudioEnumeratorPort>,
    /// Camera enumerator (platform probe tools)
    pub cameras: Arc<dyn CameraEnumeratorPort>,
    /// Network prober with the fixed production endpoints
    pub prober: Arc<NetworkProber>,
}

impl AppState {
    /// Wire the production adapters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: Arc::new(HostProbe::new()),
            audio: Arc::new(CpalAudioEnumerator::new()),
            cameras: Arc::new(PlatformCameraEnumerator::new()),
            prober: Arc::new(NetworkProber::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
