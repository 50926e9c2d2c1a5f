use std::process::Command;

/// Configure la commande pour éviter l'ouverture d'une fenêtre console sur Windows.
pub fn configure_command_no_window(cmd: &mut Command) {
    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x08000000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = cmd;
    }
}

/// Exécute une commande de sonde et retourne sa sortie standard si elle a réussi.
///
/// Un programme absent ou un code de sortie non nul donnent `None`.
pub fn probe_stdout(program: &str, args: &[&str]) -> Option<String> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    configure_command_no_window(&mut cmd);
    match cmd.output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).to_string())
        }
        Ok(output) => {
            log::debug!(
                "[probe] {program} exited with {}: {}",
                output.status,
                first_non_empty_line(&String::from_utf8_lossy(&output.stderr))
            );
            None
        }
        Err(err) => {
            log::debug!("[probe] unable to run {program}: {err}");
            None
        }
    }
}

/// Retourne la première ligne non vide d'un texte, sans espaces de bord.
pub fn first_non_empty_line(text: &str) -> String {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}
