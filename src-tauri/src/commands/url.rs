use serde::Serialize;

use crate::url_validator::{self, ValidationOutcome};

/// Résultat de validation au format attendu par le frontend.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
    pub sanitized_url: Option<String>,
}

impl From<ValidationOutcome> for UrlValidationResult {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Approved { normalized_address } => Self {
                is_valid: true,
                error: None,
                sanitized_url: Some(normalized_address),
            },
            ValidationOutcome::Rejected { reason } => Self {
                is_valid: false,
                error: Some(reason.to_string()),
                sanitized_url: None,
            },
        }
    }
}

/// Valide une adresse avant ouverture.
#[tauri::command]
pub fn validate_url(url: String) -> UrlValidationResult {
    url_validator::validate(&url).into()
}
