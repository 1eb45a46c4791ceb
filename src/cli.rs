use clap::Parser;

use crate::conversion::{self, ConversionError};
use crate::i18n::{keys, Language};
use crate::thermal::{MaterialInput, DEFAULT_THICKNESS_M};

/// Mode de sortie, résolu une seule fois après l'analyse des arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Vitesse de transfert seule, pleine précision.
    SpeedOnly,
    /// Déphasage seul, pleine précision.
    PhaseShiftOnly,
    /// `C d×1000 v D` séparés par des espaces.
    Machine,
    /// Profil complet en JSON.
    Json,
    /// Rapport lisible avec libellés.
    Report,
}

#[derive(Parser, Debug)]
#[command(
    name = "dephasage_thermique",
    version,
    allow_negative_numbers = true,
    about = "Calcule le déphasage thermique d'un matériau.",
    long_about = "Calcule le déphasage thermique d'un matériau.\n\n\
                  Pour plus d'informations, voir : \
                  https://www.autoconstruction.info/sites/www.autoconstruction.info/IMG/pdf/guide.pdf\n\n\
                  Les valeurs décimales acceptent le point ou la virgule (0.04 ou 0,04)."
)]
pub struct Args {
    /// La conductivité (en W/m.°C).
    pub conductivite: String,

    /// La masse volumique (en kg/m3).
    pub masse_volumique: String,

    /// La chaleur spécifique (en Wh/kg.°C).
    pub chaleur_specifique: String,

    /// L'épaisseur (en m, par défaut vaut : 1 m).
    #[arg(short = 'e', long = "epaisseur", visible_alias = "thickness")]
    pub epaisseur: Option<String>,

    /// Affiche toutes les valeurs en colonnes.
    #[arg(short = 'f', long = "format-machine", visible_alias = "machine-format")]
    pub format_machine: bool,

    /// Affiche uniquement la vitesse de déphasage (en cm/h).
    #[arg(short = 'v', long = "vitesse-seulement", visible_alias = "speed-only")]
    pub vitesse_seulement: bool,

    /// Affiche uniquement le déphasage (en h).
    #[arg(short = 'd', long = "dephasage-seulement", visible_alias = "phase-shift-only")]
    pub dephasage_seulement: bool,

    /// Affiche toutes les valeurs au format JSON.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Langue des libellés du rapport.
    #[arg(short = 'l', long = "langue", value_enum, default_value_t = Language::Fr)]
    pub langue: Language,
}

impl Args {
    /// Le premier drapeau présent l'emporte : vitesse, déphasage, machine, JSON.
    pub fn output_mode(&self) -> OutputMode {
        if self.vitesse_seulement {
            OutputMode::SpeedOnly
        } else if self.dephasage_seulement {
            OutputMode::PhaseShiftOnly
        } else if self.format_machine {
            OutputMode::Machine
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Report
        }
    }

    /// Convertit les saisies texte. Échoue à la première valeur invalide.
    pub fn material_input(&self) -> Result<MaterialInput, ConversionError> {
        let conductivity =
            conversion::parse_decimal(keys::FIELD_CONDUCTIVITY, &self.conductivite)?;
        let density = conversion::parse_decimal(keys::FIELD_DENSITY, &self.masse_volumique)?;
        let specific_heat =
            conversion::parse_decimal(keys::FIELD_SPECIFIC_HEAT, &self.chaleur_specifique)?;
        let thickness = match &self.epaisseur {
            Some(raw) => conversion::parse_decimal(keys::FIELD_THICKNESS, raw)?,
            None => DEFAULT_THICKNESS_M,
        };
        Ok(MaterialInput::new(conductivity, density, specific_heat).with_thickness(thickness))
    }
}
