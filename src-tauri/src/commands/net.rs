//! Network probe command.

use hostscope_core::domain::NetTestResult;

use crate::app::AppState;

/// Run the network test: external IP, latency, download and upload
/// throughput.
///
/// The frontend disables the trigger control while a test is in flight;
/// the backend itself imposes no cross-call coordination. The `Result`
/// wrapper satisfies the async-command signature; the call itself never
/// fails, sub-measurement failures land in the record's `error` field.
#[tauri::command]
pub async fn run_network_test(
    state: tauri::State<'_, AppState>,
) -> Result<NetTestResult, String> {
    Ok(state.prober.run().await)
}
