use std::io;

/// Erreurs internes des collaborateurs (sonde système, shell, configuration).
///
/// Elles ne traversent jamais l'orchestrateur: chaque étape les convertit en
/// issue de pipeline et les journalise.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// Le process n'a pas pu être démarré.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// La sonde système a échoué avant de produire un résultat.
    #[error("probe failed: {0}")]
    Probe(String),
    /// La tâche bloquante de fond a paniqué ou a été annulée.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// Le gestionnaire par défaut du système a refusé l'adresse.
    #[error("default handler failed: {0}")]
    Opener(String),
    /// La fenêtre de dernier recours n'a pas pu être créée.
    #[error("window open failed: {0}")]
    Window(String),
    /// JSON de catalogue ou de configuration invalide.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl LauncherError {
    /// Construit une erreur de lancement en conservant le nom du programme.
    pub fn spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}
