use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::LauncherConfig;
use crate::launcher::{
    AppProbe, CacheStatus, LaunchOrchestrator, LaunchReport, NativeAppLauncher, NativeAppLocator,
    OsFamily, ShellOpener, SystemProbe, ToolCatalog,
};
use crate::logo::{LogoCandidateList, LogoSourceBuilder};

/// Point d'entrée unique du coeur, construit une fois par session et partagé
/// avec les commandes IPC.
pub struct LauncherService {
    orchestrator: LaunchOrchestrator,
    probe: Arc<dyn AppProbe>,
    logos: LogoSourceBuilder,
}

impl LauncherService {
    pub fn new(
        catalog: ToolCatalog,
        os: OsFamily,
        probe: Arc<dyn AppProbe>,
        shell: Arc<dyn ShellOpener>,
        logos: LogoSourceBuilder,
    ) -> Self {
        let locator = NativeAppLocator::new(Arc::new(catalog), os, probe.clone());
        let launcher = NativeAppLauncher::new(probe.clone());
        Self {
            orchestrator: LaunchOrchestrator::new(locator, launcher, shell),
            probe,
            logos,
        }
    }

    /// Assemble le service avec la sonde système et le catalogue configuré.
    pub fn from_config(config: &LauncherConfig, shell: Arc<dyn ShellOpener>) -> Self {
        let catalog = load_catalog(config.catalog_path.as_deref());
        let os = OsFamily::current();
        log::info!(
            "[launcher] {} tools loaded, platform {os}",
            catalog.len()
        );
        let probe = Arc::new(SystemProbe::new(
            config.extra_search_dirs.clone(),
            config.flatpak,
        ));
        Self::new(
            catalog,
            os,
            probe,
            shell,
            LogoSourceBuilder::new(config.favicon_size),
        )
    }

    pub fn catalog(&self) -> &ToolCatalog {
        self.orchestrator.locator().catalog()
    }

    pub async fn launch_tool(&self, tool_id: &str, web_address: &str) -> LaunchReport {
        self.orchestrator.launch_tool(tool_id, web_address).await
    }

    /// Résolution seule (avec cache) pour un outil du catalogue.
    pub async fn resolve(&self, tool_id: &str) -> Option<PathBuf> {
        self.orchestrator.locator().resolve(tool_id).await
    }

    /// Recherche directe par noms, sans passer par le cache.
    pub async fn find_app(&self, app_names: &[String]) -> Option<PathBuf> {
        match self.probe.find_application(app_names).await {
            Ok(found) => found,
            Err(err) => {
                log::error!("[launcher] error finding app: {err}");
                None
            }
        }
    }

    pub async fn launch_app(&self, path: &Path) -> bool {
        self.orchestrator.launcher().launch(path).await
    }

    pub fn build_logo_sources(&self, declared: &[String], domain: &str) -> LogoCandidateList {
        self.logos.build(declared, domain)
    }

    /// Sources de logo d'un outil du catalogue, `None` s'il est inconnu.
    pub fn tool_logo_sources(&self, tool_id: &str) -> Option<LogoCandidateList> {
        let tool = self.catalog().get(tool_id)?;
        Some(self.logos.build(tool.logo.as_slice(), &tool.logo_domain()))
    }

    pub fn clear_cache(&self) {
        self.orchestrator.clear_cache();
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.orchestrator.locator().status()
    }
}

/// Catalogue configuré, sinon embarqué; un catalogue illisible est journalisé et remplacé.
fn load_catalog(path: Option<&Path>) -> ToolCatalog {
    if let Some(path) = path {
        match ToolCatalog::from_path(path) {
            Ok(catalog) => return catalog,
            Err(err) => log::error!("[launcher] unable to read catalog {}: {err}", path.display()),
        }
    }
    ToolCatalog::bundled().unwrap_or_else(|err| {
        log::error!("[launcher] bundled catalog is invalid: {err}");
        ToolCatalog::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::testing::{catalog_fixture, ProbeBehavior, RecordingProbe, RecordingShell};

    fn service(probe: Arc<RecordingProbe>) -> LauncherService {
        LauncherService::new(
            catalog_fixture(),
            OsFamily::Linux,
            probe,
            Arc::new(RecordingShell::default()),
            LogoSourceBuilder::default(),
        )
    }

    #[tokio::test]
    async fn find_app_bypasses_the_cache_and_absorbs_errors() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Unavailable));
        let service = service(probe.clone());

        assert_eq!(service.find_app(&["code".to_string()]).await, None);
        assert_eq!(service.find_app(&["code".to_string()]).await, None);
        assert_eq!(probe.find_calls(), 2);
        assert_eq!(service.cache_status().size, 0);
    }

    #[tokio::test]
    async fn resolve_fills_the_cache() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Found("/usr/bin/code".into())));
        let service = service(probe);

        assert_eq!(service.resolve("editor").await, Some(PathBuf::from("/usr/bin/code")));
        assert_eq!(service.cache_status().size, 1);
        service.clear_cache();
        assert_eq!(service.cache_status().size, 0);
    }

    #[test]
    fn tool_logo_sources_use_url_domain_when_none_declared() {
        let service = service(Arc::new(RecordingProbe::new(ProbeBehavior::Missing)));
        let sources = service.tool_logo_sources("webonly").unwrap();
        assert_eq!(sources.len(), 4);
        assert!(sources.get(0).unwrap().contains("domain=example.com"));
        assert!(service.tool_logo_sources("ghost").is_none());
    }

    #[test]
    fn unreadable_catalog_path_falls_back_to_bundled() {
        let catalog = load_catalog(Some(Path::new("/nonexistent/tools.json")));
        assert!(catalog.get("vscode").is_some());
    }

    #[test]
    fn configured_catalog_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, crate::launcher::testing::FIXTURE).unwrap();
        let catalog = load_catalog(Some(&path));
        assert_eq!(catalog.len(), 3);
    }
}
