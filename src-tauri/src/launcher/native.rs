use std::path::Path;
use std::sync::Arc;

use super::probe::AppProbe;
use super::StageOutcome;

/// Démarre une application native déjà résolue. Aucun cache.
pub struct NativeAppLauncher {
    probe: Arc<dyn AppProbe>,
}

impl NativeAppLauncher {
    pub fn new(probe: Arc<dyn AppProbe>) -> Self {
        Self { probe }
    }

    /// `true` si l'application a démarré; toute erreur de la sonde vaut `false`.
    pub async fn launch(&self, path: &Path) -> bool {
        matches!(self.attempt(path).await, StageOutcome::Success(()))
    }

    pub async fn attempt(&self, path: &Path) -> StageOutcome<()> {
        log::info!("[launcher] launching native app: {}", path.display());
        match self.probe.launch_application(path).await {
            Ok(true) => StageOutcome::Success(()),
            Ok(false) => {
                log::warn!("[launcher] launch reported failure for {}", path.display());
                StageOutcome::Failed("launch reported failure".to_string())
            }
            Err(err) => {
                log::error!("[launcher] error launching app: {err}");
                StageOutcome::Failed(err.to_string())
            }
        }
    }
}
