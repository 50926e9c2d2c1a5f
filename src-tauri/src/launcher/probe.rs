use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::LauncherError;

/// Collaborateur privilégié qui inspecte le système hôte et démarre des process.
#[async_trait]
pub trait AppProbe: Send + Sync {
    /// Cherche la première application installée parmi `candidates`, dans l'ordre.
    async fn find_application(
        &self,
        candidates: &[String],
    ) -> Result<Option<PathBuf>, LauncherError>;

    /// Démarre l'application située à `path`.
    async fn launch_application(&self, path: &Path) -> Result<bool, LauncherError>;
}

/// Collaborateur d'ouverture d'adresses web.
#[async_trait]
pub trait ShellOpener: Send + Sync {
    /// Ouvre l'adresse dans le gestionnaire par défaut (navigateur système).
    async fn open_in_default_handler(&self, address: &str) -> Result<(), LauncherError>;

    /// Primitive minimale de l'hôte: ouvre l'adresse dans une fenêtre de l'application.
    async fn open_window(&self, address: &str) -> Result<(), LauncherError>;
}
