use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use super::locator::NativeAppLocator;
use super::native::NativeAppLauncher;
use super::probe::ShellOpener;
use super::StageOutcome;
use crate::url_validator::{self, ValidationOutcome};

/// Bilan d'un lancement, destiné à l'interface.
///
/// Seul `Rejected` laisse l'utilisateur sans fenêtre ouverte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LaunchReport {
    Native { path: String },
    Web { address: String },
    LastResort { address: String },
    Rejected { tool: String, reason: String },
}

/// Étapes du pipeline, parcourues dans un seul sens.
#[derive(Debug)]
enum Stage {
    NativeResolve,
    NativeLaunch(PathBuf),
    WebOpen,
    LastResort(String),
    Done(LaunchReport),
}

/// Compose localisation, lancement natif et ouverture web en chaîne de repli.
pub struct LaunchOrchestrator {
    locator: NativeAppLocator,
    launcher: NativeAppLauncher,
    shell: Arc<dyn ShellOpener>,
}

impl LaunchOrchestrator {
    pub fn new(
        locator: NativeAppLocator,
        launcher: NativeAppLauncher,
        shell: Arc<dyn ShellOpener>,
    ) -> Self {
        Self {
            locator,
            launcher,
            shell,
        }
    }

    pub fn locator(&self) -> &NativeAppLocator {
        &self.locator
    }

    pub fn launcher(&self) -> &NativeAppLauncher {
        &self.launcher
    }

    /// Lance l'outil: application native si possible, sinon l'adresse web validée.
    ///
    /// Ne retourne jamais d'erreur; les échecs des collaborateurs sont journalisés
    /// et font passer à l'étape suivante.
    pub async fn launch_tool(&self, tool_id: &str, web_address: &str) -> LaunchReport {
        let mut stage = Stage::NativeResolve;
        loop {
            stage = match stage {
                Stage::NativeResolve => match self.locator.lookup(tool_id).await {
                    StageOutcome::Success(path) => Stage::NativeLaunch(path),
                    StageOutcome::NotFound | StageOutcome::Failed(_) => Stage::WebOpen,
                },
                Stage::NativeLaunch(path) => match self.launcher.attempt(&path).await {
                    StageOutcome::Success(()) => {
                        log::info!("[launcher] successfully launched native app for {tool_id}");
                        Stage::Done(LaunchReport::Native {
                            path: path.to_string_lossy().to_string(),
                        })
                    }
                    StageOutcome::NotFound | StageOutcome::Failed(_) => {
                        log::info!("[launcher] failed to launch native app, falling back to URL");
                        Stage::WebOpen
                    }
                },
                Stage::WebOpen => self.open_web(tool_id, web_address).await,
                Stage::LastResort(address) => {
                    log::info!("[launcher] using an application window as last resort");
                    if let Err(err) = self.shell.open_window(&address).await {
                        log::error!("[launcher] last resort window failed: {err}");
                    }
                    Stage::Done(LaunchReport::LastResort { address })
                }
                Stage::Done(report) => return report,
            };
        }
    }

    async fn open_web(&self, tool_id: &str, web_address: &str) -> Stage {
        let address = match url_validator::validate(web_address) {
            ValidationOutcome::Approved { normalized_address } => normalized_address,
            ValidationOutcome::Rejected { reason } => {
                let tool = self.tool_name(tool_id);
                log::error!("[launcher] refusing to open URL for {tool}: {reason}");
                return Stage::Done(LaunchReport::Rejected {
                    tool,
                    reason: reason.to_string(),
                });
            }
        };

        log::info!("[launcher] opening web URL for {tool_id}: {address}");
        match self.shell.open_in_default_handler(&address).await {
            Ok(()) => Stage::Done(LaunchReport::Web { address }),
            Err(err) => {
                log::error!("[launcher] error opening URL for {tool_id}: {err}");
                Stage::LastResort(address)
            }
        }
    }

    fn tool_name(&self, tool_id: &str) -> String {
        self.locator
            .catalog()
            .get(tool_id)
            .map(|tool| tool.display_name().to_string())
            .unwrap_or_else(|| tool_id.to_string())
    }

    /// Vide le cache de résolution.
    pub fn clear_cache(&self) {
        self.locator.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::platform::OsFamily;
    use crate::launcher::testing::{
        catalog_fixture, LaunchBehavior, ProbeBehavior, RecordingProbe, RecordingShell,
    };

    fn orchestrator(
        os: OsFamily,
        probe: Arc<RecordingProbe>,
        shell: Arc<RecordingShell>,
    ) -> LaunchOrchestrator {
        let locator = NativeAppLocator::new(Arc::new(catalog_fixture()), os, probe.clone());
        LaunchOrchestrator::new(locator, NativeAppLauncher::new(probe), shell)
    }

    #[tokio::test]
    async fn native_success_never_touches_the_web() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Found(
            "/Applications/Visual Studio Code.app".into(),
        )));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::MacOs, probe.clone(), shell.clone());

        let report = orchestrator.launch_tool("editor", "javascript:alert(1)").await;

        assert_eq!(
            report,
            LaunchReport::Native {
                path: "/Applications/Visual Studio Code.app".into()
            }
        );
        assert_eq!(probe.launched().len(), 1);
        assert!(shell.default_opens().is_empty());
        assert!(shell.window_opens().is_empty());
    }

    #[tokio::test]
    async fn tool_without_executables_goes_straight_to_web() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Found("/bin/x".into())));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe.clone(), shell.clone());

        let report = orchestrator.launch_tool("webonly", "https://example.com").await;

        assert_eq!(
            report,
            LaunchReport::Web {
                address: "https://example.com/".into()
            }
        );
        assert_eq!(probe.find_calls(), 0);
        assert!(probe.launched().is_empty());
        assert_eq!(shell.default_opens(), vec!["https://example.com/".to_string()]);
    }

    #[tokio::test]
    async fn unavailable_probe_behaves_like_not_found() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Unavailable));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe.clone(), shell.clone());

        let report = orchestrator
            .launch_tool("editor", "https://code.visualstudio.com")
            .await;

        assert!(matches!(report, LaunchReport::Web { .. }));
        assert_eq!(probe.find_calls(), 1);
        assert!(probe.launched().is_empty());
        assert_eq!(shell.default_opens().len(), 1);
    }

    #[tokio::test]
    async fn rejected_address_opens_nothing() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Missing));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe, shell.clone());

        let report = orchestrator.launch_tool("webonly", "file:///etc/passwd").await;

        match report {
            LaunchReport::Rejected { tool, reason } => {
                assert_eq!(tool, "Web Only");
                assert!(reason.contains("file"));
            }
            other => panic!("unexpected report: {other:?}"),
        }
        assert!(shell.default_opens().is_empty());
        assert!(shell.window_opens().is_empty());
    }

    #[tokio::test]
    async fn failed_native_launch_falls_back_to_web() {
        let probe = Arc::new(RecordingProbe::with_launch(
            ProbeBehavior::Found("/usr/bin/code".into()),
            LaunchBehavior::Errors,
        ));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe.clone(), shell.clone());

        let report = orchestrator
            .launch_tool("editor", "https://code.visualstudio.com")
            .await;

        assert_eq!(
            report,
            LaunchReport::Web {
                address: "https://code.visualstudio.com/".into()
            }
        );
        assert_eq!(probe.launched(), vec![PathBuf::from("/usr/bin/code")]);
    }

    #[tokio::test]
    async fn shell_failure_uses_last_resort_with_normalized_address() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Missing));
        let shell = Arc::new(RecordingShell::failing());
        let orchestrator = orchestrator(OsFamily::Linux, probe, shell.clone());

        let report = orchestrator.launch_tool("webonly", "HTTPS://Example.com").await;

        assert_eq!(
            report,
            LaunchReport::LastResort {
                address: "https://example.com/".into()
            }
        );
        assert_eq!(shell.default_opens().len(), 1);
        assert_eq!(shell.window_opens(), vec!["https://example.com/".to_string()]);
    }

    #[tokio::test]
    async fn failing_last_resort_window_is_still_reported() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Missing));
        let shell = Arc::new(RecordingShell::broken());
        let orchestrator = orchestrator(OsFamily::Linux, probe, shell.clone());

        let report = orchestrator.launch_tool("webonly", "https://example.com").await;

        assert_eq!(
            report,
            LaunchReport::LastResort {
                address: "https://example.com/".into()
            }
        );
        assert_eq!(shell.default_opens().len(), 1);
        assert_eq!(shell.window_opens().len(), 1);
    }

    #[tokio::test]
    async fn second_launch_reuses_cached_resolution() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Missing));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe.clone(), shell.clone());

        orchestrator.launch_tool("editor", "https://a.example.com").await;
        orchestrator.launch_tool("editor", "https://a.example.com").await;
        assert_eq!(probe.find_calls(), 1);

        orchestrator.clear_cache();
        orchestrator.launch_tool("editor", "https://a.example.com").await;
        assert_eq!(probe.find_calls(), 2);
    }

    #[tokio::test]
    async fn unknown_tool_rejection_names_the_id() {
        let probe = Arc::new(RecordingProbe::new(ProbeBehavior::Missing));
        let shell = Arc::new(RecordingShell::default());
        let orchestrator = orchestrator(OsFamily::Linux, probe, shell);

        let report = orchestrator.launch_tool("ghost", "  ").await;
        assert_eq!(
            report,
            LaunchReport::Rejected {
                tool: "ghost".into(),
                reason: "empty address".into()
            }
        );
    }
}
