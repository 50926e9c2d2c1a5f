use std::sync::Arc;

use tauri::Manager;

use crate::config::{LauncherConfig, CONFIG_FILE_NAME};
use crate::service::LauncherService;

mod invoke;
mod shell;

use shell::TauriShell;

/// Construit et lance l'application Tauri avec plugins, setup et commandes IPC.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Les applications lancées depuis le Dock/Finder n'héritent pas du PATH du shell.
    // Le plugin de log n'est pas encore installé à ce stade.
    if let Err(err) = fix_path_env::fix() {
        eprintln!("[launcher] unable to restore shell PATH: {err}");
    }

    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());
    let builder = invoke::register_invoke_handler(builder);

    builder
        .setup(|app| {
            let config = match app.path().app_config_dir() {
                Ok(dir) => LauncherConfig::load_or_default(&dir.join(CONFIG_FILE_NAME)),
                Err(_) => LauncherConfig::default(),
            };

            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(config.level_filter())
                    .build(),
            )?;

            // Un seul service par session: il possède le cache de résolution.
            let shell = Arc::new(TauriShell::new(
                app.handle().clone(),
                config.last_resort_window.clone(),
            ));
            app.manage(LauncherService::from_config(&config, shell));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
