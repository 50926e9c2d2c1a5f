//! Pipeline de résolution et de lancement des outils.
//!
//! Ordre des étapes: résolution native, lancement natif, ouverture web validée,
//! puis fenêtre de dernier recours.

mod catalog;
mod locator;
mod native;
mod orchestrator;
mod platform;
mod probe;
mod system;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{PlatformExecutables, ToolCatalog, ToolDescriptor};
pub use locator::{CacheEntryStatus, CacheStatus, NativeAppLocator};
pub use native::NativeAppLauncher;
pub use orchestrator::{LaunchOrchestrator, LaunchReport};
pub use platform::OsFamily;
pub use probe::{AppProbe, ShellOpener};
pub use system::SystemProbe;

/// Issue d'une étape du pipeline. Les erreurs des collaborateurs s'arrêtent ici.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageOutcome<T> {
    Success(T),
    NotFound,
    Failed(String),
}
