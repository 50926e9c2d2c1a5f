use std::collections::HashSet;
use std::path::PathBuf;

/// Supprime les chemins dupliqués en conservant l'ordre.
pub fn dedupe_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();
    for path in paths {
        let key = path.to_string_lossy().to_string();
        if seen.insert(key) {
            deduped.push(path);
        }
    }
    deduped
}

/// Répertoire personnel, vide si introuvable.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default()
}

/// Répertoires d'installation standards de l'hôte, dans l'ordre de recherche.
pub fn standard_app_dirs() -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut paths: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "windows")]
    {
        let program_files =
            std::env::var("ProgramFiles").unwrap_or_else(|_| "C:\\Program Files".to_string());
        let program_files_x86 = std::env::var("ProgramFiles(x86)")
            .unwrap_or_else(|_| "C:\\Program Files (x86)".to_string());
        paths.push(PathBuf::from(program_files));
        paths.push(PathBuf::from(program_files_x86));
        if let Some(local) = dirs::data_local_dir() {
            paths.push(local.join("Programs"));
            paths.push(local);
        }
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("/Applications"));
        paths.push(home_dir().join("Applications"));
        paths.push(PathBuf::from("/System/Applications"));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        paths.push(PathBuf::from("/usr/bin"));
        paths.push(PathBuf::from("/usr/local/bin"));
        paths.push(PathBuf::from("/opt"));
        paths.push(PathBuf::from("/snap/bin"));
        paths.push(home_dir().join(".local").join("bin"));
    }

    dedupe_paths(paths)
}
