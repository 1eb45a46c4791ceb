//! Déphasage thermique d'une couche de matériau de construction.
//!
//! Le calcul est séparé de l'exécutable pour être réutilisé et testé directement.

pub mod app;
pub mod cli;
pub mod conversion;
pub mod i18n;
pub mod report;
pub mod thermal;
