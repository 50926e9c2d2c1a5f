//! Entrypoint de la bibliothèque Tauri du lanceur d'outils.
//!
//! Le coeur (résolution native, validation d'URL, sources de logo) ne dépend
//! pas de Tauri; la couche `desktop` déclare les commandes IPC et délègue
//! l'exécution à `app::run()`.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logo;
pub mod service;
pub mod url_validator;
mod utils;

#[cfg(feature = "desktop")]
mod app;
#[cfg(feature = "desktop")]
mod commands;

pub use error::LauncherError;
pub use service::LauncherService;

/// Lance l'application Tauri.
#[cfg(feature = "desktop")]
pub fn run() {
    app::run();
}
