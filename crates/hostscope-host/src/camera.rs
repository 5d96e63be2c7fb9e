//! Camera enumeration via the platform's probe facility.
//!
//! There is no cross-platform camera API on the level of `cpal`, so each
//! target queries its native discovery surface: `system_profiler` on
//! macOS, a CIM query on Windows, the video4linux sysfs tree on Linux.
//! A failure to run the probe itself is a component error; a host with no
//! cameras yields an empty list.

use hostscope_core::ports::{CameraEnumeratorPort, DeviceError};

/// Production camera enumerator for the compiled target platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformCameraEnumerator;

impl PlatformCameraEnumerator {
    /// Create a new camera enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CameraEnumeratorPort for PlatformCameraEnumerator {
    fn list_cameras(&self) -> Result<Vec<String>, DeviceError> {
        #[cfg(target_os = "macos")]
        {
            macos::list()
        }
        #[cfg(target_os = "windows")]
        {
            windows::list()
        }
        #[cfg(target_os = "linux")]
        {
            linux::list()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Ok(Vec::new())
        }
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use std::process::Command;

    use hostscope_core::ports::DeviceError;

    pub fn list() -> Result<Vec<String>, DeviceError> {
        let output = Command::new("system_profiler")
            .args(["SPCameraDataType", "-json"])
            .output()
            .map_err(|e| DeviceError::Enumeration(format!("system_profiler: {e}")))?;

        if !output.status.success() {
            return Err(DeviceError::Enumeration(format!(
                "system_profiler exited with {}",
                output.status
            )));
        }

        parse_camera_json(&output.stdout)
    }

    fn parse_camera_json(raw: &[u8]) -> Result<Vec<String>, DeviceError> {
        let json: serde_json::Value = serde_json::from_slice(raw)
            .map_err(|e| DeviceError::Enumeration(format!("unexpected system_profiler output: {e}")))?;

        let cameras = json
            .get("SPCameraDataType")
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|c| c.get("_name").and_then(|n| n.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(cameras)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_system_profiler_payload() {
            let raw = br#"{"SPCameraDataType":[{"_name":"FaceTime HD Camera","spcamera_model-id":"UVC"}]}"#;
            let cameras = parse_camera_json(raw).unwrap();
            assert_eq!(cameras, vec!["FaceTime HD Camera".to_string()]);
        }

        #[test]
        fn missing_section_means_no_cameras() {
            let cameras = parse_camera_json(b"{}").unwrap();
            assert!(cameras.is_empty());
        }

        #[test]
        fn garbage_output_is_an_enumeration_error() {
            assert!(parse_camera_json(b"not json").is_err());
        }
    }
}

#[cfg(target_os = "windows")]
mod windows {
    use std::process::Command;

    use hostscope_core::ports::DeviceError;

    pub fn list() -> Result<Vec<String>, DeviceError> {
        let output = Command::new("powershell")
            .args([
                "-NoProfile",
                "-Command",
                "Get-CimInstance Win32_PnPEntity -Filter \"PNPClass='Camera' or PNPClass='Image'\" | Select-Object -ExpandProperty Name",
            ])
            .output()
            .map_err(|e| DeviceError::Enumeration(format!("powershell: {e}")))?;

        if !output.status.success() {
            return Err(DeviceError::Enumeration(format!(
                "camera CIM query exited with {}",
                output.status
            )));
        }

        Ok(parse_name_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    fn parse_name_lines(raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_one_name_per_line() {
            let names = parse_name_lines("Integrated Camera\r\nUSB Webcam\r\n\r\n");
            assert_eq!(
                names,
                vec!["Integrated Camera".to_string(), "USB Webcam".to_string()]
            );
        }
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use std::io::ErrorKind;
    use std::path::Path;

    use hostscope_core::ports::DeviceError;

    const V4L_SYSFS: &str = "/sys/class/video4linux";

    pub fn list() -> Result<Vec<String>, DeviceError> {
        scan(Path::new(V4L_SYSFS))
    }

    /// Scan a video4linux sysfs tree for device names.
    ///
    /// An absent tree means the kernel has no v4l devices: an empty
    /// result, not a failure. Anything else that prevents the scan is a
    /// component error.
    fn scan(base: &Path) -> Result<Vec<String>, DeviceError> {
        let entries = match std::fs::read_dir(base) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DeviceError::Enumeration(format!("{}: {e}", base.display()))),
        };

        let mut cameras = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| DeviceError::Enumeration(format!("{}: {e}", base.display())))?;
            // Each node carries a `name` attribute; nodes without one are
            // identified by their sysfs directory name instead.
            let name = std::fs::read_to_string(entry.path().join("name"))
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| entry.file_name().to_string_lossy().into_owned());
            cameras.push(name);
        }

        // read_dir order is arbitrary; sort so repeat calls are stable.
        cameras.sort_unstable();
        Ok(cameras)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn absent_sysfs_tree_means_no_cameras() {
            let cameras = scan(Path::new("/nonexistent/video4linux")).unwrap();
            assert!(cameras.is_empty());
        }

        #[test]
        fn reads_and_sorts_device_names() {
            let dir = tempfile::tempdir().unwrap();
            for (node, name) in [("video1", "USB Webcam: UVC\n"), ("video0", "Integrated Camera\n")] {
                let node_dir = dir.path().join(node);
                std::fs::create_dir(&node_dir).unwrap();
                std::fs::write(node_dir.join("name"), name).unwrap();
            }

            let cameras = scan(dir.path()).unwrap();
            assert_eq!(
                cameras,
                vec![
                    "Integrated Camera".to_string(),
                    "USB Webcam: UVC".to_string()
                ]
            );
        }

        #[test]
        fn node_without_name_attribute_falls_back_to_node_name() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::create_dir(dir.path().join("video0")).unwrap();

            let cameras = scan(dir.path()).unwrap();
            assert_eq!(cameras, vec!["video0".to_string()]);
        }
    }
}
