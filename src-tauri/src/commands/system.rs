//! Host snapshot command.

use hostscope_core::domain::SystemInfo;

use crate::app::AppState;

/// Take a fresh host snapshot.
///
/// Best-effort by contract: facts the platform cannot determine come back
/// as `null` fields, so this command never fails.
#[tauri::command]
pub fn get_system_info(state: tauri::State<'_, AppState>) -> SystemInfo {
    state.host.system_info()
}
