use std::net::IpAddr;

use serde::Serialize;
use url::{Host, Url};

use super::sources::LogoCandidateList;

/// État d'affichage du logo d'une carte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "camelCase")]
pub enum LogoDisplayState {
    Showing(usize),
    /// Terminal pour le cycle de rendu courant.
    Placeholder,
}

/// Machine d'état qui parcourt les sources de logo au fil des échecs de chargement.
#[derive(Clone, Debug)]
pub struct LogoDisplay {
    tool_id: String,
    sources: LogoCandidateList,
    state: LogoDisplayState,
}

impl LogoDisplay {
    pub fn new(tool_id: impl Into<String>, sources: LogoCandidateList) -> Self {
        let mut display = Self {
            tool_id: tool_id.into(),
            sources,
            state: LogoDisplayState::Showing(0),
        };
        display.enter(0);
        display
    }

    pub fn state(&self) -> LogoDisplayState {
        self.state
    }

    /// Adresse à afficher, `None` en placeholder.
    pub fn current_source(&self) -> Option<&str> {
        match self.state {
            LogoDisplayState::Showing(index) => self.sources.get(index),
            LogoDisplayState::Placeholder => None,
        }
    }

    /// Échec de chargement de la source courante.
    pub fn advance(&mut self) -> LogoDisplayState {
        if let LogoDisplayState::Showing(index) = self.state {
            self.enter(index + 1);
        }
        self.state
    }

    /// Repart de la première source quand la carte affiche un autre outil.
    pub fn reset_for(&mut self, tool_id: &str, sources: LogoCandidateList) {
        if self.tool_id == tool_id && self.sources == sources {
            return;
        }
        self.tool_id = tool_id.to_string();
        self.sources = sources;
        self.enter(0);
    }

    fn enter(&mut self, index: usize) {
        self.state = match self.sources.get(index) {
            Some(source) if is_loopback_address(source) => LogoDisplayState::Placeholder,
            Some(_) => LogoDisplayState::Showing(index),
            None => LogoDisplayState::Placeholder,
        };
    }
}

/// Initiale affichée à la place du logo.
pub fn placeholder_initial(name: &str) -> Option<char> {
    name.trim().chars().next().map(|c| c.to_uppercase().next().unwrap_or(c))
}

/// Adresse pointant sur la machine locale (`localhost`, `127.0.0.0/8`, `::1`).
pub fn is_loopback_address(address: &str) -> bool {
    let Ok(parsed) = Url::parse(address.trim()) else {
        return false;
    };
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}
