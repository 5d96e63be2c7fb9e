//! Audio device enumeration via `cpal`.

use cpal::traits::{DeviceTrait, HostTrait};
use hostscope_core::domain::AudioDevices;
use hostscope_core::ports::{AudioEnumeratorPort, DeviceError};
use tracing::debug;

/// Production audio enumerator using the default `cpal` host
/// (CoreAudio on macOS, WASAPI on Windows, ALSA on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalAudioEnumerator;

impl CpalAudioEnumerator {
    /// Create a new audio enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AudioEnumeratorPort for CpalAudioEnumerator {
    fn list_audio_devices(&self) -> Result<AudioDevices, DeviceError> {
        let host = cpal::default_host();

        let default_input = host.default_input_device().and_then(|d| d.name().ok());
        let default_output = host.default_output_device().and_then(|d| d.name().ok());

        // A failing enumeration call is a component error; devices that
        // merely refuse to report a name are skipped.
        let mut inputs = Vec::new();
        for device in host
            .input_devices()
            .map_err(|e| DeviceError::Enumeration(e.to_string()))?
        {
            if let Ok(name) = device.name() {
                inputs.push(name);
            }
        }

        let mut outputs = Vec::new();
        for device in host
            .output_devices()
            .map_err(|e| DeviceError::Enumeration(e.to_string()))?
        {
            if let Ok(name) = device.name() {
                outputs.push(name);
            }
        }

        debug!(
            inputs = inputs.len(),
            outputs = outputs.len(),
            "audio devices enumerated"
        );

        Ok(AudioDevices {
            inputs,
            outputs,
            default_input,
            default_output,
        })
    }
}
