use std::path::{Path, PathBuf};
use std::process::Command;

use async_trait::async_trait;

use super::probe::AppProbe;
use crate::error::LauncherError;
use crate::utils::path::{dedupe_paths, standard_app_dirs};
use crate::utils::process::{configure_command_no_window, first_non_empty_line, probe_stdout};

/// Préfixe des chemins résolus via Flatpak (`flatpak:<application id>`).
const FLATPAK_PREFIX: &str = "flatpak:";

/// Sonde réelle: outils de recherche du système puis répertoires d'installation connus.
///
/// Le travail bloquant (process de recherche, spawn) tourne dans le pool bloquant
/// de Tokio pour ne pas figer l'UI.
#[derive(Clone, Debug)]
pub struct SystemProbe {
    extra_search_dirs: Vec<PathBuf>,
    flatpak: bool,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(Vec::new(), true)
    }
}

impl SystemProbe {
    pub fn new(extra_search_dirs: Vec<PathBuf>, flatpak: bool) -> Self {
        Self {
            extra_search_dirs: dedupe_paths(extra_search_dirs),
            flatpak,
        }
    }
}

#[async_trait]
impl AppProbe for SystemProbe {
    async fn find_application(
        &self,
        candidates: &[String],
    ) -> Result<Option<PathBuf>, LauncherError> {
        let names = candidates.to_vec();
        let probe = self.clone();
        let found = tokio::task::spawn_blocking(move || probe.find_blocking(&names)).await?;
        Ok(found)
    }

    async fn launch_application(&self, path: &Path) -> Result<bool, LauncherError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || launch_blocking(&path)).await?
    }
}

impl SystemProbe {
    /// Essaie chaque nom dans l'ordre; le premier nom trouvé l'emporte.
    fn find_blocking(&self, names: &[String]) -> Option<PathBuf> {
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let direct = Path::new(name);
            if direct.is_absolute() {
                if is_installed(direct) {
                    return Some(direct.to_path_buf());
                }
                continue;
            }

            if let Some(path) = find_in_dirs(name, &self.extra_search_dirs) {
                return Some(path);
            }
            if let Some(path) = find_with_system_tools(name) {
                return Some(path);
            }
            if let Some(path) = find_in_dirs(name, &standard_app_dirs()) {
                return Some(path);
            }
            if self.flatpak {
                if let Some(path) = find_flatpak(name) {
                    return Some(path);
                }
            }
        }
        None
    }
}

/// Noms de fichiers relatifs à tester dans un répertoire d'installation.
fn installed_file_names(name: &str) -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        let exe = format!("{name}.exe");
        vec![PathBuf::from(&exe), Path::new(name).join(&exe)]
    } else if cfg!(target_os = "macos") {
        vec![PathBuf::from(format!("{name}.app")), PathBuf::from(name)]
    } else {
        vec![PathBuf::from(name)]
    }
}

fn find_in_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let files = installed_file_names(name);
    dirs.iter()
        .flat_map(|dir| files.iter().map(move |file| dir.join(file)))
        .find(|candidate| is_installed(candidate))
}

/// Un bundle `.app` est un répertoire; tout le reste doit être un fichier.
fn is_installed(candidate: &Path) -> bool {
    if candidate.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("app")) {
        candidate.is_dir()
    } else {
        candidate.is_file()
    }
}

#[cfg(target_os = "windows")]
fn find_with_system_tools(name: &str) -> Option<PathBuf> {
    probe_stdout("where", &[name])
        .map(|out| first_non_empty_line(&out))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
}

#[cfg(target_os = "macos")]
fn find_with_system_tools(name: &str) -> Option<PathBuf> {
    let literal = spotlight_literal(name);
    let by_name = format!("kMDItemKind == 'Application' && kMDItemFSName == '{literal}.app'");
    if let Some(path) = spotlight(&by_name) {
        return Some(path);
    }

    // Les noms pointés sont traités comme des identifiants de bundle.
    if name.contains('.') {
        let by_bundle = format!("kMDItemCFBundleIdentifier == '{literal}'");
        return spotlight(&by_bundle);
    }
    None
}

/// Échappe une valeur placée entre apostrophes dans une requête Spotlight.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn spotlight_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(target_os = "macos")]
fn spotlight(query: &str) -> Option<PathBuf> {
    probe_stdout("mdfind", &[query])
        .map(|out| first_non_empty_line(&out))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn find_with_system_tools(name: &str) -> Option<PathBuf> {
    let which = probe_stdout("which", &[name])
        .map(|out| first_non_empty_line(&out))
        .filter(|line| !line.is_empty());
    if let Some(path) = which {
        return Some(PathBuf::from(path));
    }

    probe_stdout("whereis", &["-b", name])
        .and_then(|out| parse_whereis(&out))
        .map(PathBuf::from)
}

/// Extrait le premier binaire d'une sortie `whereis -b` (`nom: /chemin ...`).
#[cfg_attr(any(target_os = "windows", target_os = "macos"), allow(dead_code))]
fn parse_whereis(output: &str) -> Option<String> {
    let (_, paths) = output.split_once(':')?;
    paths.split_whitespace().next().map(str::to_string)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn find_flatpak(name: &str) -> Option<PathBuf> {
    let list = probe_stdout("flatpak", &["list", "--app", "--columns=application"])?;
    match_flatpak_id(&list, name).map(|id| PathBuf::from(format!("{FLATPAK_PREFIX}{id}")))
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn find_flatpak(_name: &str) -> Option<PathBuf> {
    None
}

/// Cherche `name` dans la liste des applications Flatpak: identifiant exact,
/// ou dernier segment de l'identifiant (`com.visualstudio.code` pour `code`).
#[cfg_attr(any(target_os = "windows", target_os = "macos"), allow(dead_code))]
fn match_flatpak_id<'a>(list: &'a str, name: &str) -> Option<&'a str> {
    let wanted = name.to_ascii_lowercase();
    list.lines().map(str::trim).find(|id| {
        let id = id.to_ascii_lowercase();
        !id.is_empty() && (id == wanted || id.rsplit('.').next() == Some(wanted.as_str()))
    })
}

fn launch_blocking(path: &Path) -> Result<bool, LauncherError> {
    let raw = path.to_string_lossy().to_string();

    let mut cmd = if let Some(app_id) = raw.strip_prefix(FLATPAK_PREFIX) {
        let mut cmd = Command::new("flatpak");
        cmd.args(["run", app_id]);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", raw.as_str()]);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(&raw);
        cmd
    } else {
        Command::new(path)
    };
    configure_command_no_window(&mut cmd);

    let program = cmd.get_program().to_string_lossy().to_string();
    let mut child = cmd
        .spawn()
        .map_err(|err| LauncherError::spawn(program, err))?;

    // Le process lancé vit sa vie; on le récolte seulement pour éviter un zombie.
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(true)
}
