use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::catalog::ToolCatalog;
use super::platform::OsFamily;
use super::probe::AppProbe;
use super::StageOutcome;

/// Entrée exposée pour le diagnostic du cache.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryStatus {
    pub tool_id: String,
    pub path: Option<String>,
}

/// Photographie du cache de résolution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CacheStatus {
    pub size: usize,
    pub entries: Vec<CacheEntryStatus>,
}

/// Localise l'application native d'un outil et mémorise le résultat pour la session.
///
/// Une entrée écrite (chemin ou `None`) fait foi jusqu'à [`NativeAppLocator::clear`].
/// Deux résolutions concurrentes du même outil ne sont pas fusionnées: chacune
/// interroge la sonde et la dernière écriture l'emporte.
pub struct NativeAppLocator {
    catalog: Arc<ToolCatalog>,
    os: OsFamily,
    probe: Arc<dyn AppProbe>,
    cache: Mutex<HashMap<String, Option<PathBuf>>>,
}

impl NativeAppLocator {
    pub fn new(catalog: Arc<ToolCatalog>, os: OsFamily, probe: Arc<dyn AppProbe>) -> Self {
        Self {
            catalog,
            os,
            probe,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Retourne le chemin de l'application native si elle est installée.
    pub async fn resolve(&self, tool_id: &str) -> Option<PathBuf> {
        match self.lookup(tool_id).await {
            StageOutcome::Success(path) => Some(path),
            StageOutcome::NotFound | StageOutcome::Failed(_) => None,
        }
    }

    /// Résolution détaillée: l'échec de la sonde reste distinguable pour la journalisation,
    /// mais il est mis en cache exactement comme une absence.
    pub async fn lookup(&self, tool_id: &str) -> StageOutcome<PathBuf> {
        if let Some(cached) = self.cached(tool_id) {
            log::debug!("[locator] cache hit for {tool_id}");
            return match cached {
                Some(path) => StageOutcome::Success(path),
                None => StageOutcome::NotFound,
            };
        }

        let candidates = self.catalog.executables_for(tool_id, self.os);
        if candidates.is_empty() {
            // Pas de mapping natif: la sonde n'est jamais sollicitée.
            self.store(tool_id, None);
            return StageOutcome::NotFound;
        }

        log::info!("[locator] searching for {tool_id} with executables: {candidates:?}");
        let outcome = match self.probe.find_application(&candidates).await {
            Ok(Some(path)) => {
                log::info!("[locator] found {tool_id} at: {}", path.display());
                StageOutcome::Success(path)
            }
            Ok(None) => {
                log::info!("[locator] native app not found for {tool_id}");
                StageOutcome::NotFound
            }
            Err(err) => {
                log::error!("[locator] error finding app for {tool_id}: {err}");
                StageOutcome::Failed(err.to_string())
            }
        };

        let path = match &outcome {
            StageOutcome::Success(path) => Some(path.clone()),
            _ => None,
        };
        self.store(tool_id, path);
        outcome
    }

    /// Vide le cache (applications installées ou désinstallées entre-temps).
    pub fn clear(&self) {
        self.lock_cache().clear();
        log::info!("[locator] cache cleared");
    }

    pub fn status(&self) -> CacheStatus {
        let cache = self.lock_cache();
        let mut entries: Vec<CacheEntryStatus> = cache
            .iter()
            .map(|(tool_id, path)| CacheEntryStatus {
                tool_id: tool_id.clone(),
                path: path.as_ref().map(|p| p.to_string_lossy().to_string()),
            })
            .collect();
        entries.sort_by(|a, b| a.tool_id.cmp(&b.tool_id));
        CacheStatus {
            size: cache.len(),
            entries,
        }
    }

    fn cached(&self, tool_id: &str) -> Option<Option<PathBuf>> {
        self.lock_cache().get(tool_id).cloned()
    }

    fn store(&self, tool_id: &str, path: Option<PathBuf>) {
        self.lock_cache().insert(tool_id.to_string(), path);
    }

    /// Le verrou n'est jamais tenu à travers un `.await`.
    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, Option<PathBuf>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
