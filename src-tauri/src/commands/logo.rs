use tauri::State;

use crate::logo::DeclaredLogo;
use crate::service::LauncherService;

/// Liste ordonnée des sources de logo: déclarées puis générées depuis le domaine.
#[tauri::command]
pub fn build_logo_sources(
    service: State<'_, LauncherService>,
    primary_logos: DeclaredLogo,
    domain: String,
) -> Vec<String> {
    service
        .build_logo_sources(primary_logos.as_slice(), &domain)
        .into_vec()
}

/// Sources de logo d'un outil du catalogue.
#[tauri::command]
pub fn get_tool_logo_sources(
    service: State<'_, LauncherService>,
    tool_id: String,
) -> Option<Vec<String>> {
    service
        .tool_logo_sources(&tool_id)
        .map(|sources| sources.into_vec())
}
