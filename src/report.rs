//! Mise en forme d'un [`ThermalProfile`] selon le mode de sortie choisi.

use std::fmt::Write;

use crate::cli::OutputMode;
use crate::i18n::{keys, Translator};
use crate::thermal::ThermalProfile;

/// Largeur minimale, alignée à droite, des valeurs du rapport lisible.
pub const VALUE_WIDTH: usize = 5;

/// Largeur des libellés du rapport (le plus long : « Vitesse de transfert »).
const LABEL_WIDTH: usize = 20;

#[derive(Debug)]
pub enum ReportError {
    Json(serde_json::Error),
    Format(std::fmt::Error),
}

impl ReportError {
    pub fn localized(&self, tr: &Translator) -> String {
        match self {
            ReportError::Json(e) => tr.fill(keys::ERROR_JSON, &[("detail", e.to_string())]),
            ReportError::Format(e) => tr.fill(keys::ERROR_FORMAT, &[("detail", e.to_string())]),
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.localized(&Translator::default()))
    }
}

impl std::error::Error for ReportError {}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

impl From<std::fmt::Error> for ReportError {
    fn from(value: std::fmt::Error) -> Self {
        ReportError::Format(value)
    }
}

/// Produit le texte à écrire sur la sortie standard (sans saut de ligne final).
pub fn render(
    profile: &ThermalProfile,
    mode: OutputMode,
    tr: &Translator,
) -> Result<String, ReportError> {
    Ok(match mode {
        OutputMode::SpeedOnly => full_precision(profile.transfer_speed),
        OutputMode::PhaseShiftOnly => full_precision(profile.phase_shift),
        OutputMode::Machine => machine_line(profile),
        OutputMode::Json => serde_json::to_string_pretty(&JsonProfile::from(profile))?,
        OutputMode::Report => human_report(profile, tr)?,
    })
}

/// Représentation la plus courte qui relit la même valeur, toujours avec un point
/// décimal. La notation scientifique (|x| < 1e-4 ou ≥ 1e16) garde un exposant
/// signé d'au moins deux chiffres : `1e-05`, `1.5e+16`.
pub fn full_precision(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// `C d×1000 v D` au format `%.0f %.2f %.2f %.2f`.
pub fn machine_line(profile: &ThermalProfile) -> String {
    format!(
        "{:.0} {:.2} {:.2} {:.2}",
        profile.thermal_capacity,
        profile.diffusivity_x1000(),
        profile.transfer_speed,
        profile.phase_shift
    )
}

fn push_line(
    out: &mut String,
    label: &str,
    value: f64,
    precision: usize,
    unit: &str,
) -> std::fmt::Result {
    writeln!(
        out,
        "\t{label:>lw$}: {value:>vw$.precision$} {unit}",
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH,
    )
}

/// Rapport lisible : données entrées puis résultats.
pub fn human_report(profile: &ThermalProfile, tr: &Translator) -> Result<String, ReportError> {
    let input = &profile.input;
    let mut out = String::new();

    writeln!(out, "{}", tr.t(keys::HEADING_INPUTS))?;
    push_line(&mut out, tr.t(keys::LABEL_CONDUCTIVITY), input.conductivity, 2, "W/m.°C")?;
    push_line(&mut out, tr.t(keys::LABEL_DENSITY), input.density, 0, "kg/m3")?;
    push_line(&mut out, tr.t(keys::LABEL_SPECIFIC_HEAT), input.specific_heat, 3, "Wh/kg.°C")?;
    push_line(&mut out, tr.t(keys::LABEL_THICKNESS), input.thickness, 2, "m")?;
    writeln!(out)?;

    writeln!(out, "{}", tr.t(keys::HEADING_RESULTS))?;
    push_line(
        &mut out,
        tr.t(keys::LABEL_THERMAL_CAPACITY),
        profile.thermal_capacity,
        0,
        "Wh/m3.°C",
    )?;
    push_line(
        &mut out,
        tr.t(keys::LABEL_DIFFUSIVITY),
        profile.diffusivity_x1000(),
        2,
        "10^-3 m2/h",
    )?;
    push_line(&mut out, tr.t(keys::LABEL_TRANSFER_SPEED), profile.transfer_speed, 2, "cm/h")?;
    push_line(&mut out, tr.t(keys::LABEL_PHASE_SHIFT), profile.phase_shift, 2, "h")?;

    Ok(out.trim_end_matches('\n').to_string())
}

/// Forme JSON : entrées et grandeurs dérivées, unités dans les noms de champs.
#[derive(Debug, serde::Serialize)]
struct JsonProfile {
    conductivity_w_per_m_c: f64,
    density_kg_per_m3: f64,
    specific_heat_wh_per_kg_c: f64,
    thickness_m: f64,
    thermal_capacity_wh_per_m3_c: f64,
    diffusivity_m2_per_h: f64,
    transfer_speed_cm_per_h: f64,
    phase_shift_h: f64,
}

impl From<&ThermalProfile> for JsonProfile {
    fn from(p: &ThermalProfile) -> Self {
        Self {
            conductivity_w_per_m_c: p.input.conductivity,
            density_kg_per_m3: p.input.density,
            specific_heat_wh_per_kg_c: p.input.specific_heat,
            thickness_m: p.input.thickness,
            thermal_capacity_wh_per_m3_c: p.thermal_capacity,
            diffusivity_m2_per_h: p.diffusivity,
            transfer_speed_cm_per_h: p.transfer_speed,
            phase_shift_h: p.phase_shift,
        }
    }
}
