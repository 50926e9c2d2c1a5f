/// Commandes de résolution et de lancement des outils.
pub mod launcher;
/// Commandes de sources de logo.
pub mod logo;
/// Commandes de validation d'adresses.
pub mod url;
