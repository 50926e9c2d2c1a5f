use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::platform::OsFamily;
use crate::error::LauncherError;
use crate::logo::{extract_domain, DeclaredLogo};

/// Catalogue embarqué, utilisé quand aucun fichier n'est configuré.
const BUNDLED_CATALOG: &str = include_str!("../../resources/tools.json");

/// Noms d'exécutables ou identifiants de bundle candidats, par plateforme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformExecutables {
    #[serde(default)]
    pub windows: Option<Vec<String>>,
    #[serde(default)]
    pub macos: Option<Vec<String>>,
    #[serde(default)]
    pub linux: Option<Vec<String>>,
}

impl PlatformExecutables {
    /// Liste de la plateforme demandée; les autres listes ne sont jamais lues.
    pub fn for_os(&self, os: OsFamily) -> &[String] {
        let list = match os {
            OsFamily::Windows => &self.windows,
            OsFamily::MacOs => &self.macos,
            OsFamily::Linux => &self.linux,
        };
        list.as_deref().unwrap_or(&[])
    }
}

/// Entrée du catalogue d'outils, en lecture seule pour le pipeline de lancement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Adresse web de repli.
    pub url: String,
    #[serde(default)]
    pub logo: DeclaredLogo,
    /// Domaine explicite pour les services de favicon.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub executables: Option<PlatformExecutables>,
}

impl ToolDescriptor {
    pub fn executables_for(&self, os: OsFamily) -> &[String] {
        self.executables
            .as_ref()
            .map(|executables| executables.for_os(os))
            .unwrap_or(&[])
    }

    /// Domaine utilisé pour les logos générés: explicite, sinon extrait de l'URL.
    pub fn logo_domain(&self) -> String {
        match self.domain.as_deref() {
            Some(domain) if !domain.trim().is_empty() => domain.trim().to_string(),
            _ => extract_domain(&self.url),
        }
    }

    /// Nom affichable, l'identifiant servant de repli.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Catalogue des outils connus, indexé par identifiant.
#[derive(Clone, Debug, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Parse un tableau JSON de descripteurs. Les champs inconnus sont ignorés.
    pub fn from_json(json: &str) -> Result<Self, LauncherError> {
        let tools: Vec<ToolDescriptor> = serde_json::from_str(json)?;
        Ok(Self::new(tools))
    }

    pub fn from_path(path: &Path) -> Result<Self, LauncherError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Catalogue livré avec l'application.
    pub fn bundled() -> Result<Self, LauncherError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, tool_id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.id == tool_id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Candidats ordonnés pour `tool_id` sur `os`.
    ///
    /// Un outil inconnu ou sans entrée pour cette plateforme donne une liste vide.
    pub fn executables_for(&self, tool_id: &str, os: OsFamily) -> Vec<String> {
        self.get(tool_id)
            .map(|tool| tool.executables_for(os).to_vec())
            .unwrap_or_default()
    }
}
