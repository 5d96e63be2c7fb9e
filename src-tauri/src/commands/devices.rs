//! Device enumeration commands.

use hostscope_core::domain::AudioDevices;

use crate::app::AppState;

/// List audio input/output devices and the platform defaults.
///
/// An enumeration failure is a component-level error: the frontend shows
/// nothing for the audio section rather than partial data.
#[tauri::command]
pub fn list_audio_devices(state: tauri::State<'_, AppState>) -> Result<AudioDevices, String> {
    state.audio.list_audio_devices().map_err(|e| format!("{e}"))
}

/// List names of attached cameras.
#[tauri::command]
pub fn list_cameras(state: tauri::State<'_, AppState>) -> Result<Vec<String>, String> {
    state.cameras.list_cameras().map_err(|e| format!("{e}"))
}
