use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LauncherError;
use crate::logo::DEFAULT_FAVICON_SIZE;

/// Nom du fichier de configuration dans le répertoire de config de l'application.
pub const CONFIG_FILE_NAME: &str = "launcher.json";

/// Géométrie de la fenêtre ouverte en dernier recours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Toolbox".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Réglages du lanceur, lus depuis `launcher.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherConfig {
    /// Niveau de journalisation (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
    /// Catalogue d'outils externe; le catalogue embarqué sinon.
    pub catalog_path: Option<PathBuf>,
    /// Répertoires sondés avant les emplacements standards.
    pub extra_search_dirs: Vec<PathBuf>,
    /// Consulte `flatpak list` sous Linux.
    pub flatpak: bool,
    pub favicon_size: u32,
    pub last_resort_window: WindowConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            log_level: (if cfg!(debug_assertions) { "info" } else { "warn" }).to_string(),
            catalog_path: None,
            extra_search_dirs: Vec::new(),
            flatpak: true,
            favicon_size: DEFAULT_FAVICON_SIZE,
            last_resort_window: WindowConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Lit la configuration; un fichier absent donne les valeurs par défaut.
    pub fn load(path: &Path) -> Result<Self, LauncherError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Comme [`LauncherConfig::load`], mais retombe sur les défauts en journalisant l'erreur.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::error!("[config] ignoring {}: {err}", path.display());
            Self::default()
        })
    }

    /// Niveau de log effectif; une valeur inconnue retombe sur `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}
