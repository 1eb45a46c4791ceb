//! Calculs d'inertie thermique d'une couche de matériau.
//! Capacité thermique, diffusivité, déphasage et vitesse de transfert de l'onde de chaleur.

pub mod phase_shift;
pub mod properties;

pub use phase_shift::*;
pub use properties::*;

use crate::i18n::{keys, Translator};

/// Erreurs de domaine levées par les formules thermiques.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalError {
    /// ρ·c = 0 : la diffusivité λ / (ρ·c) n'est pas définie.
    ZeroThermalCapacity,
    /// d = 0 : 1/d n'est pas défini.
    ZeroDiffusivity,
    /// d < 0 : racine carrée d'un nombre négatif.
    NegativeDiffusivity(f64),
    /// Dépassement ou sous-dépassement flottant : `quantity` est la clé `i18n` de la grandeur.
    NonFiniteResult { quantity: &'static str, value: f64 },
}

impl ThermalError {
    pub fn localized(&self, tr: &Translator) -> String {
        match self {
            ThermalError::ZeroThermalCapacity => tr.t(keys::ERROR_ZERO_CAPACITY).to_string(),
            ThermalError::ZeroDiffusivity => tr.t(keys::ERROR_ZERO_DIFFUSIVITY).to_string(),
            ThermalError::NegativeDiffusivity(d) => {
                tr.fill(keys::ERROR_NEGATIVE_DIFFUSIVITY, &[("d", d.to_string())])
            }
            ThermalError::NonFiniteResult { quantity, value } => tr.fill(
                keys::ERROR_NON_FINITE_RESULT,
                &[("quantity", tr.t(quantity).to_string()), ("value", value.to_string())],
            ),
        }
    }
}

impl std::fmt::Display for ThermalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.localized(&Translator::default()))
    }
}

impl std::error::Error for ThermalError {}

/// `value` si elle est finie, sinon [`ThermalError::NonFiniteResult`].
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, ThermalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ThermalError::NonFiniteResult { quantity, value })
    }
}
