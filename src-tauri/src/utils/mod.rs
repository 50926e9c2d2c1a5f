/// Utilitaires transverses de chemins et de répertoires d'installation.
pub mod path;
/// Utilitaires transverses de gestion de process externes.
pub mod process;
