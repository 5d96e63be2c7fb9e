//! Audio device enumeration record.

use serde::{Deserialize, Serialize};

/// Audio devices attached to the host at enumeration time.
///
/// Names are opaque strings from the platform audio layer; uniqueness is
/// not guaranteed. Empty lists are a legitimate result (no devices
/// present), distinct from an enumeration failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDevices {
    /// Input (capture) device names.
    pub inputs: Vec<String>,
    /// Output (playback) device names.
    pub outputs: Vec<String>,
    /// Name of the system default input device, if the platform reports one.
    pub default_input: Option<String>,
    /// Name of the system default output device, if the platform reports one.
    pub default_output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_with_no_defaults() {
        let devices = AudioDevices::default();
        assert!(devices.inputs.is_empty());
        assert!(devices.outputs.is_empty());
        assert!(devices.default_input.is_none());
        assert!(devices.default_output.is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let devices = AudioDevices {
            inputs: vec![],
            outputs: vec!["Built-in Output".to_string()],
            default_input: None,
            default_output: Some("Built-in Output".to_string()),
        };

        let json = serde_json::to_value(devices).unwrap();
        assert!(json["inputs"].as_array().unwrap().is_empty());
        assert_eq!(json["defaultOutput"], "Built-in Output");
        assert!(json["defaultInput"].is_null());
    }
}
