use std::path::Path;

use tauri::State;

use crate::launcher::{CacheStatus, LaunchReport};
use crate::service::LauncherService;

/// Cherche une application native parmi les noms donnés, sans cache.
#[tauri::command]
pub async fn find_app(
    service: State<'_, LauncherService>,
    app_names: Vec<String>,
) -> Result<Option<String>, String> {
    Ok(service
        .find_app(&app_names)
        .await
        .map(|path| path.to_string_lossy().to_string()))
}

/// Lance l'application native située à `app_path`.
#[tauri::command]
pub async fn launch_app(
    service: State<'_, LauncherService>,
    app_path: String,
) -> Result<bool, String> {
    Ok(service.launch_app(Path::new(&app_path)).await)
}

/// Lance un outil du catalogue avec repli sur son adresse web.
///
/// Ne renvoie jamais d'erreur: un refus de l'adresse est un `LaunchReport::Rejected`.
#[tauri::command]
pub async fn launch_tool(
    service: State<'_, LauncherService>,
    tool_id: String,
    web_url: String,
) -> Result<LaunchReport, String> {
    Ok(service.launch_tool(&tool_id, &web_url).await)
}

/// Vide le cache de résolution des applications natives.
#[tauri::command]
pub fn clear_app_cache(service: State<'_, LauncherService>) {
    service.clear_cache();
}

#[tauri::command]
pub fn get_cache_status(service: State<'_, LauncherService>) -> CacheStatus {
    service.cache_status()
}
