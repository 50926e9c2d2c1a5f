//! Validation des adresses web avant toute ouverture.
//!
//! Seuls `http` et `https` sont autorisés. Les schémas dangereux sont refusés
//! sur la chaîne brute, avant le parsing, pour qu'une adresse malformée mais
//! reconnaissable ne passe jamais.

use regex::Regex;
use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

lazy_static::lazy_static! {
    /// Schémas interdits, insensibles à la casse, recherchés dans toute l'adresse.
    static ref DANGEROUS_SCHEME: Regex =
        Regex::new(r"(?i)(javascript|data|vbscript|file|about):").expect("static regex");
}

/// Motif de refus d'une adresse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("empty address")]
    Empty,
    #[error("dangerous protocol detected in address: {scheme}:")]
    DangerousScheme { scheme: String },
    #[error("invalid address format: {0}")]
    Malformed(String),
    #[error("protocol \"{0}:\" is not allowed, only http: and https: are permitted")]
    DisallowedProtocol(String),
    #[error("invalid address: missing hostname")]
    MissingHost,
}

/// Résultat de validation, produit à chaque appel et jamais conservé.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Approved { normalized_address: String },
    Rejected { reason: RejectionReason },
}

impl ValidationOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    /// Adresse normalisée, uniquement si approuvée.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Approved { normalized_address } => Some(normalized_address),
            Self::Rejected { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<String, RejectionReason> {
        match self {
            Self::Approved { normalized_address } => Ok(normalized_address),
            Self::Rejected { reason } => Err(reason),
        }
    }

    fn rejected(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }
}

/// Valide `address` et retourne sa sérialisation canonique si elle est sûre.
pub fn validate(address: &str) -> ValidationOutcome {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return ValidationOutcome::rejected(RejectionReason::Empty);
    }

    if let Some(captures) = DANGEROUS_SCHEME.captures(trimmed) {
        let scheme = captures[1].to_ascii_lowercase();
        return ValidationOutcome::rejected(RejectionReason::DangerousScheme { scheme });
    }

    let parsed = match Url::parse(trimmed) {
        Ok(parsed) => parsed,
        Err(err) => return ValidationOutcome::rejected(RejectionReason::Malformed(err.to_string())),
    };

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return ValidationOutcome::rejected(RejectionReason::DisallowedProtocol(
            parsed.scheme().to_string(),
        ));
    }

    let has_host = parsed
        .host_str()
        .map(|host| !host.trim().is_empty())
        .unwrap_or(false);
    if !has_host {
        return ValidationOutcome::rejected(RejectionReason::MissingHost);
    }

    ValidationOutcome::Approved {
        normalized_address: parsed.to_string(),
    }
}

/// Raccourci booléen de [`validate`].
pub fn is_url_safe(address: &str) -> bool {
    validate(address).is_approved()
}
