//! Conversion des saisies texte en valeurs numériques.
//!
//! Toutes les valeurs numériques saisies passent par [`parse_decimal`] afin que
//! la virgule et le point soient acceptés de la même façon partout.

use crate::i18n::{keys, Translator};

/// Erreur de conversion d'une saisie en nombre décimal.
///
/// `field` est la clé `i18n` de la grandeur (`keys::FIELD_*`).
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// La chaîne n'est pas un nombre, même après remplacement de `,` par `.`.
    InvalidNumber { field: &'static str, raw: String },
    /// `nan`, `inf`... sont lisibles par `f64::from_str` mais refusés ici.
    NonFinite { field: &'static str, raw: String },
}

impl ConversionError {
    pub fn localized(&self, tr: &Translator) -> String {
        let (key, field, raw) = match self {
            ConversionError::InvalidNumber { field, raw } => {
                (keys::ERROR_INVALID_NUMBER, field, raw)
            }
            ConversionError::NonFinite { field, raw } => {
                (keys::ERROR_NON_FINITE_INPUT, field, raw)
            }
        };
        tr.fill(key, &[("field", tr.t(field).to_string()), ("raw", raw.clone())])
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.localized(&Translator::default()))
    }
}

impl std::error::Error for ConversionError {}

/// Convertit une saisie décimale (`1.5` ou `1,5`) en `f64`.
///
/// `field` est la clé de la grandeur citée dans le message d'erreur.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ConversionError> {
    let normalized = raw.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| ConversionError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ConversionError::NonFinite {
            field,
            raw: raw.to_string(),
        });
    }
    Ok(value)
}
