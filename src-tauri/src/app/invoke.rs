use crate::commands;

/// Enregistre la liste unique des commandes IPC exposées au frontend.
pub fn register_invoke_handler(builder: tauri::Builder<tauri::Wry>) -> tauri::Builder<tauri::Wry> {
    builder.invoke_handler(tauri::generate_handler![
        commands::launcher::find_app,
        commands::launcher::launch_app,
        commands::launcher::launch_tool,
        commands::launcher::clear_app_cache,
        commands::launcher::get_cache_status,
        commands::url::validate_url,
        commands::logo::build_logo_sources,
        commands::logo::get_tool_logo_sources
    ])
}
