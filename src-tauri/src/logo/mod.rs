//! Sources de logo des outils et leur parcours à l'affichage.

mod display;
mod sources;

pub use display::{is_loopback_address, placeholder_initial, LogoDisplay, LogoDisplayState};
pub use sources::{
    build_logo_sources, extract_domain, DeclaredLogo, LogoCandidateList, LogoSourceBuilder,
    DEFAULT_FAVICON_SIZE,
};
