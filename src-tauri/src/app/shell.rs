use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tauri::{AppHandle, WebviewUrl, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt;
use url::Url;

use crate::config::WindowConfig;
use crate::error::LauncherError;
use crate::launcher::ShellOpener;

/// Ouverture d'adresses via le plugin opener, fenêtre Tauri en dernier recours.
pub struct TauriShell {
    app: AppHandle,
    window: WindowConfig,
    next_label: AtomicUsize,
}

impl TauriShell {
    pub fn new(app: AppHandle, window: WindowConfig) -> Self {
        Self {
            app,
            window,
            next_label: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ShellOpener for TauriShell {
    async fn open_in_default_handler(&self, address: &str) -> Result<(), LauncherError> {
        self.app
            .opener()
            .open_url(address, None::<&str>)
            .map_err(|err| LauncherError::Opener(err.to_string()))
    }

    async fn open_window(&self, address: &str) -> Result<(), LauncherError> {
        let url = Url::parse(address).map_err(|err| LauncherError::Window(err.to_string()))?;
        let label = format!(
            "tool-window-{}",
            self.next_label.fetch_add(1, Ordering::Relaxed)
        );
        let window = self.window.clone();
        let handle = self.app.clone();

        // La création de fenêtre doit se faire sur le thread principal (macOS).
        self.app
            .run_on_main_thread(move || {
                let built = WebviewWindowBuilder::new(&handle, &label, WebviewUrl::External(url))
                    .title(&window.title)
                    .inner_size(window.width, window.height)
                    .build();
                if let Err(err) = built {
                    log::error!("[launcher] unable to open window {label}: {err}");
                }
            })
            .map_err(|err| LauncherError::Window(err.to_string()))
    }
}
