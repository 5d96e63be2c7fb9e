// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;

use app::AppState;
use dotenvy::dotenv;
use tracing::info;

/// Initialize tracing for the Tauri GUI.
///
/// Log level is controlled by the RUST_LOG environment variable
/// (default: warn).
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn main() {
    let _ = dotenv();

    init_tracing();

    info!("Tauri application starting");

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            app.manage(AppState::new());

            // Open devtools for debugging (Tauri 2.x always includes devtools in debug builds)
            #[cfg(debug_assertions)]
            {
                if let Some(window) = app.get_webview_window("main") {
                    window.open_devtools();
                }
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Host facts: shown on load and on refresh
            commands::system::get_system_info,
            // Device snapshots: shown on load and on refresh
            commands::devices::list_audio_devices,
            commands::devices::list_cameras,
            // Network probe: explicit user action only
            commands::net::run_network_test,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
