//! GPU detection via platform probe tools.
//!
//! Display adapters are not part of the `sysinfo` surface, so this module
//! shells out to the native tools: `system_profiler` on macOS, `wmic`
//! (with a PowerShell fallback) on Windows, `lspci` on Linux. Detection
//! is best-effort: any failure yields an empty list, never an error.

use hostscope_core::domain::GpuDevice;

/// Detect display adapters on this host.
#[must_use]
pub fn list_gpus() -> Vec<GpuDevice> {
    #[cfg(target_os = "macos")]
    {
        macos::detect()
    }
    #[cfg(target_os = "windows")]
    {
        windows::detect()
    }
    #[cfg(target_os = "linux")]
    {
        linux::detect()
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        Vec::new()
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use std::process::Command;

    use hostscope_core::domain::GpuDevice;

    pub fn detect() -> Vec<GpuDevice> {
        let Ok(output) = Command::new("system_profiler")
            .args(["SPDisplaysDataType", "-json"])
            .output()
        else {
            return Vec::new();
        };

        if !output.status.success() {
            return Vec::new();
        }

        parse_displays_json(&output.stdout)
    }

    fn parse_displays_json(raw: &[u8]) -> Vec<GpuDevice> {
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(raw) else {
            return Vec::new();
        };

        json.get("SPDisplaysDataType")
            .and_then(|v| v.as_array())
            .map(|displays| {
                displays
                    .iter()
                    .map(|display| GpuDevice {
                        name: display
                            .get("sppci_model")
                            .or_else(|| display.get("_name"))
                            .and_then(|v| v.as_str())
                            .unwrap_or("Unknown GPU")
                            .to_string(),
                        vendor: display
                            .get("sppci_vendor")
                            .or_else(|| display.get("spdisplays_vendor"))
                            .and_then(|v| v.as_str())
                            .unwrap_or("Unknown")
                            .to_string(),
                        vram: display
                            .get("sppci_vram")
                            .or_else(|| display.get("spdisplays_vram"))
                            .and_then(|v| v.as_str())
                            .map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

}

#[cfg(target_os = "windows")]
mod windows {
    use std::process::Command;

    use hostscope_core::domain::GpuDevice;

    pub fn detect() -> Vec<GpuDevice> {
        // wmic is present on most installs; PowerShell covers the rest.
        if let Ok(output) = Command::new("wmic")
            .args([
                "path",
                "win32_VideoController",
                "get",
                "Name,AdapterRAM",
                "/format:csv",
            ])
            .output()
        {
            if output.status.success() {
                let gpus = parse_wmic_csv(&String::from_utf8_lossy(&output.stdout));
                if !gpus.is_empty() {
                    return gpus;
                }
            }
        }

        detect_via_powershell()
    }

    fn detect_via_powershell() -> Vec<GpuDevice> {
        let Ok(output) = Command::new("powershell")
            .args([
                "-NoProfile",
                "-Command",
                "Get-CimInstance Win32_VideoController | Select-Object Name, AdapterRAM | ConvertTo-Json",
            ])
            .output()
        else {
            return Vec::new();
        };

        if !output.status.success() {
            return Vec::new();
        }

        parse_powershell_json(&output.stdout)
    }

    // CSV layout: Node,AdapterRAM,Name
    fn parse_wmic_csv(raw: &str) -> Vec<GpuDevice> {
        raw.lines()
            .skip(1)
            .filter_map(|line| {
                let parts: Vec<&str> = line.split(',').collect();
                if parts.len() < 3 {
                    return None;
                }
                let name = parts[2].trim();
                if name.is_empty() || name == "Name" {
                    return None;
                }
                Some(GpuDevice {
                    name: name.to_string(),
                    vendor: "Unknown".to_string(),
                    vram: parts[1].trim().parse::<u64>().ok().and_then(format_vram),
                })
            })
            .collect()
    }

    fn parse_powershell_json(raw: &[u8]) -> Vec<GpuDevice> {
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(raw) else {
            return Vec::new();
        };

        // A single adapter serializes as an object, multiple as an array.
        let items = match json {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };

        items
            .iter()
            .map(|item| GpuDevice {
                name: item
                    .get("Name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown GPU")
                    .to_string(),
                vendor: "Unknown".to_string(),
                vram: item
                    .get("AdapterRAM")
                    .and_then(serde_json::Value::as_u64)
                    .and_then(format_vram),
            })
            .collect()
    }

    fn format_vram(bytes: u64) -> Option<String> {
        (bytes > 0).then(|| format!("{} MB", bytes / 1024 / 1024))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_wmic_csv_rows() {
            let raw = "Node,AdapterRAM,Name\r\nDESKTOP,4294967296,NVIDIA GeForce RTX 3060\r\n";
            let gpus = parse_wmic_csv(raw);
            assert_eq!(gpus.len(), 1);
            assert_eq!(gpus[0].name, "NVIDIA GeForce RTX 3060");
            assert_eq!(gpus[0].vram.as_deref(), Some("4096 MB"));
        }

        #[test]
        fn parses_single_powershell_object() {
            let raw = br#"{"Name":"Intel(R) UHD Graphics","AdapterRAM":1073741824}"#;
            let gpus = parse_powershell_json(raw);
            assert_eq!(gpus.len(), 1);
            assert_eq!(gpus[0].vram.as_deref(), Some("1024 MB"));
        }

        #[test]
        fn zero_adapter_ram_is_absent() {
            let raw = br#"[{"Name":"Virtual Display","AdapterRAM":0}]"#;
            let gpus = parse_powershell_json(raw);
            assert!(gpus[0].vram.is_none());
        }
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use std::process::Command;

    use hostscope_core::domain::GpuDevice;

    pub fn detect() -> Vec<GpuDevice> {
        let Ok(output) = Command::new("lspci").output() else {
            return Vec::new();
        };

        if !output.status.success() {
            return Vec::new();
        }

        parse_lspci(&String::from_utf8_lossy(&output.stdout))
    }

    // Typical line:
    // 01:00.0 VGA compatible controller: NVIDIA Corporation GA106 [GeForce RTX 3060] (rev a1)
    fn parse_lspci(raw: &str) -> Vec<GpuDevice> {
        raw.lines()
            .filter_map(|line| {
                let class_and_device = line.split_once(' ').map(|(_, rest)| rest)?;
                let (class, device) = class_and_device.split_once(": ")?;
                if !class.contains("VGA compatible controller") && !class.contains("3D controller")
                {
                    return None;
                }
                let name = device.trim().to_string();
                Some(GpuDevice {
                    vendor: vendor_from_name(&name),
                    name,
                    vram: None,
                })
            })
            .collect()
    }

    fn vendor_from_name(name: &str) -> String {
        let lower = name.to_lowercase();
        for vendor in ["NVIDIA", "AMD", "Intel"] {
            if lower.contains(&vendor.to_lowercase()) {
                return vendor.to_string();
            }
        }
        "Unknown".to_string()
    }

}
