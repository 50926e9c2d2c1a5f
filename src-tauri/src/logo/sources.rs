use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

/// Taille demandée au service de favicons par défaut.
pub const DEFAULT_FAVICON_SIZE: u32 = 128;

/// Logo(s) déclaré(s) par un outil: une adresse unique ou une liste ordonnée.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredLogo {
    Single(String),
    Many(Vec<String>),
}

impl Default for DeclaredLogo {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl DeclaredLogo {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(source) => std::slice::from_ref(source),
            Self::Many(sources) => sources,
        }
    }
}

impl From<&str> for DeclaredLogo {
    fn from(source: &str) -> Self {
        Self::Single(source.to_string())
    }
}

impl From<Vec<String>> for DeclaredLogo {
    fn from(sources: Vec<String>) -> Self {
        Self::Many(sources)
    }
}

/// Liste ordonnée et dédupliquée des adresses de logo d'un outil. Jamais vide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogoCandidateList(Vec<String>);

impl LogoCandidateList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Toujours `false`; présent pour la symétrie avec `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Construit les listes de logos; seul le paramètre de taille du favicon varie.
#[derive(Clone, Copy, Debug)]
pub struct LogoSourceBuilder {
    favicon_size: u32,
}

impl Default for LogoSourceBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FAVICON_SIZE)
    }
}

impl LogoSourceBuilder {
    pub fn new(favicon_size: u32) -> Self {
        Self { favicon_size }
    }

    /// Adresses générées depuis le domaine, dans l'ordre: favicon, logo, icône,
    /// icône de dépôt.
    pub fn fallbacks(&self, domain: &str) -> [String; 4] {
        let domain = strip_www(domain.trim());
        [
            format!(
                "https://www.google.com/s2/favicons?domain={domain}&sz={}",
                self.favicon_size
            ),
            format!("https://logo.clearbit.com/{domain}"),
            format!("https://icons.duckduckgo.com/ip3/{domain}.ico"),
            format!("https://favicons.githubusercontent.com/{domain}"),
        ]
    }

    /// Sources déclarées d'abord, puis les adresses générées; première occurrence conservée.
    pub fn build<I, S>(&self, declared: I, domain: &str) -> LogoCandidateList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let declared = declared.into_iter().map(|s| s.as_ref().to_string());
        let mut seen = HashSet::new();
        let sources = declared
            .chain(self.fallbacks(domain))
            .filter(|source| seen.insert(source.clone()))
            .collect();
        LogoCandidateList(sources)
    }
}

/// [`LogoSourceBuilder::build`] avec la taille de favicon par défaut.
pub fn build_logo_sources<I, S>(declared: I, domain: &str) -> LogoCandidateList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LogoSourceBuilder::default().build(declared, domain)
}

/// Domaine d'une URL sans `www.`; l'entrée est rendue telle quelle si elle ne se parse pas.
pub fn extract_domain(address: &str) -> String {
    match Url::parse(address) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => strip_www(host).to_string(),
            None => address.to_string(),
        },
        Err(_) => address.to_string(),
    }
}

fn strip_www(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}
