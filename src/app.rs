use log::debug;

use crate::cli::Args;
use crate::conversion::ConversionError;
use crate::i18n::{keys, Translator};
use crate::report::{self, ReportError};
use crate::thermal::{self, ThermalError};

/// Erreurs pouvant interrompre une exécution.
#[derive(Debug)]
pub enum AppError {
    /// Saisie non numérique
    Conversion(ConversionError),
    /// Division par zéro ou racine d'un nombre négatif
    Thermal(ThermalError),
    /// Échec de mise en forme de la sortie
    Report(ReportError),
}

impl AppError {
    /// Message complet dans la langue de `tr`, sans le préfixe « Erreur ».
    pub fn localized(&self, tr: &Translator) -> String {
        let (key, detail) = match self {
            AppError::Conversion(e) => (keys::ERROR_CONVERSION, e.localized(tr)),
            AppError::Thermal(e) => (keys::ERROR_DOMAIN, e.localized(tr)),
            AppError::Report(e) => (keys::ERROR_OUTPUT, e.localized(tr)),
        };
        tr.fill(key, &[("detail", detail)])
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.localized(&Translator::default()))
    }
}

impl std::error::Error for AppError {}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ThermalError> for AppError {
    fn from(value: ThermalError) -> Self {
        AppError::Thermal(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// Convertit, calcule puis met en forme. Rien n'est produit si une étape échoue.
pub fn run(args: &Args) -> Result<String, AppError> {
    let mode = args.output_mode();
    debug!("mode de sortie: {mode:?}");
    let input = args.material_input()?;
    let profile = thermal::compute_thermal_profile(input)?;
    let tr = Translator::new(args.langue);
    Ok(report::render(&profile, mode, &tr)?)
}
