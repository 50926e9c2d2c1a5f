//! Doublures de test des collaborateurs système.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::catalog::ToolCatalog;
use super::probe::{AppProbe, ShellOpener};
use crate::error::LauncherError;

pub const FIXTURE: &str = r#"[
    {
        "id": "editor",
        "name": "Editor",
        "url": "https://code.visualstudio.com",
        "executables": {
            "windows": ["Code"],
            "macos": ["com.microsoft.VSCode", "Visual Studio Code"],
            "linux": ["code", "code-insiders"]
        }
    },
    { "id": "webonly", "name": "Web Only", "url": "https://example.com" },
    {
        "id": "mac-only",
        "name": "Mac Only",
        "url": "https://mac.example.com",
        "executables": { "macos": ["MacOnly"] }
    }
]"#;

pub fn catalog_fixture() -> ToolCatalog {
    ToolCatalog::from_json(FIXTURE).unwrap()
}

pub enum ProbeBehavior {
    Found(PathBuf),
    Missing,
    Unavailable,
}

pub enum LaunchBehavior {
    Launches(bool),
    Errors,
}

pub struct RecordingProbe {
    find: ProbeBehavior,
    launch: LaunchBehavior,
    find_calls: AtomicUsize,
    searched: Mutex<Vec<Vec<String>>>,
    launched: Mutex<Vec<PathBuf>>,
}

impl RecordingProbe {
    pub fn new(find: ProbeBehavior) -> Self {
        Self::with_launch(find, LaunchBehavior::Launches(true))
    }

    pub fn with_launch(find: ProbeBehavior, launch: LaunchBehavior) -> Self {
        Self {
            find,
            launch,
            find_calls: AtomicUsize::new(0),
            searched: Mutex::new(Vec::new()),
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn searched(&self) -> Vec<Vec<String>> {
        self.searched.lock().unwrap().clone()
    }

    pub fn launched(&self) -> Vec<PathBuf> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppProbe for RecordingProbe {
    async fn find_application(
        &self,
        candidates: &[String],
    ) -> Result<Option<PathBuf>, LauncherError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.searched.lock().unwrap().push(candidates.to_vec());
        // Rend la main comme une vraie sonde, pour entrelacer les résolutions.
        tokio::task::yield_now().await;
        match &self.find {
            ProbeBehavior::Found(path) => Ok(Some(path.clone())),
            ProbeBehavior::Missing => Ok(None),
            ProbeBehavior::Unavailable => Err(LauncherError::Probe("unavailable".into())),
        }
    }

    async fn launch_application(&self, path: &Path) -> Result<bool, LauncherError> {
        self.launched.lock().unwrap().push(path.to_path_buf());
        match self.launch {
            LaunchBehavior::Launches(result) => Ok(result),
            LaunchBehavior::Errors => Err(LauncherError::Probe("spawn refused".into())),
        }
    }
}

#[derive(Default)]
pub struct RecordingShell {
    pub fail_default_handler: bool,
    pub fail_window: bool,
    default_opens: Mutex<Vec<String>>,
    window_opens: Mutex<Vec<String>>,
}

impl RecordingShell {
    pub fn failing() -> Self {
        Self {
            fail_default_handler: true,
            ..Self::default()
        }
    }

    /// Ni navigateur par défaut ni fenêtre.
    pub fn broken() -> Self {
        Self {
            fail_default_handler: true,
            fail_window: true,
            ..Self::default()
        }
    }

    pub fn default_opens(&self) -> Vec<String> {
        self.default_opens.lock().unwrap().clone()
    }

    pub fn window_opens(&self) -> Vec<String> {
        self.window_opens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShellOpener for RecordingShell {
    async fn open_in_default_handler(&self, address: &str) -> Result<(), LauncherError> {
        self.default_opens.lock().unwrap().push(address.to_string());
        if self.fail_default_handler {
            return Err(LauncherError::Opener("no default browser".into()));
        }
        Ok(())
    }

    async fn open_window(&self, address: &str) -> Result<(), LauncherError> {
        self.window_opens.lock().unwrap().push(address.to_string());
        if self.fail_window {
            return Err(LauncherError::Window("event loop closed".into()));
        }
        Ok(())
    }
}
