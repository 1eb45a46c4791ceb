use log::debug;

use super::{diffusivity, ensure_finite, thermal_capacity, ThermalError};
use crate::i18n::keys;

/// Coefficient du déphasage d'une onde de chaleur de période journalière
/// (guide d'autoconstruction, autoconstruction.info) : D = 1.38 · e · √(1/d).
pub const PHASE_SHIFT_COEFFICIENT: f64 = 1.38;

/// Coefficient de la vitesse de transfert, tiré de la même relation, en cm/h :
/// v = 72.5 / √(1/d).
pub const TRANSFER_SPEED_COEFFICIENT: f64 = 72.5;

/// Épaisseur par défaut de la paroi (m).
pub const DEFAULT_THICKNESS_M: f64 = 1.0;

/// Facteur d'affichage de la diffusivité (m2/h -> 10^-3 m2/h).
pub const DIFFUSIVITY_DISPLAY_SCALE: f64 = 1000.0;

/// √(1/d), uniquement défini pour d > 0.
fn inverse_sqrt_diffusivity(diffusivity: f64) -> Result<f64, ThermalError> {
    if diffusivity == 0.0 {
        Err(ThermalError::ZeroDiffusivity)
    } else if diffusivity < 0.0 {
        Err(ThermalError::NegativeDiffusivity(diffusivity))
    } else {
        Ok((1.0 / diffusivity).sqrt())
    }
}

/// Déphasage (h) pour une diffusivité `diffusivity` (m2/h) et une épaisseur `thickness` (m).
pub fn phase_shift(diffusivity: f64, thickness: f64) -> Result<f64, ThermalError> {
    let shift = PHASE_SHIFT_COEFFICIENT * thickness * inverse_sqrt_diffusivity(diffusivity)?;
    ensure_finite(keys::FIELD_PHASE_SHIFT, shift)
}

/// Vitesse de transfert de l'onde de chaleur (cm/h).
pub fn transfer_speed(diffusivity: f64) -> Result<f64, ThermalError> {
    let speed = TRANSFER_SPEED_COEFFICIENT / inverse_sqrt_diffusivity(diffusivity)?;
    ensure_finite(keys::FIELD_TRANSFER_SPEED, speed)
}

/// Caractéristiques saisies d'un matériau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialInput {
    /// Conductivité λ (W/m.°C)
    pub conductivity: f64,
    /// Masse volumique ρ (kg/m3)
    pub density: f64,
    /// Chaleur spécifique c (Wh/kg.°C)
    pub specific_heat: f64,
    /// Épaisseur e (m)
    pub thickness: f64,
}

impl MaterialInput {
    pub fn new(conductivity: f64, density: f64, specific_heat: f64) -> Self {
        Self {
            conductivity,
            density,
            specific_heat,
            thickness: DEFAULT_THICKNESS_M,
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Ensemble des grandeurs dérivées d'un matériau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalProfile {
    pub input: MaterialInput,
    /// Capacité thermique (Wh/m3.°C)
    pub thermal_capacity: f64,
    /// Diffusivité (m2/h)
    pub diffusivity: f64,
    /// Vitesse de transfert (cm/h)
    pub transfer_speed: f64,
    /// Déphasage (h)
    pub phase_shift: f64,
}

impl ThermalProfile {
    /// Diffusivité en 10^-3 m2/h, pour l'affichage.
    pub fn diffusivity_x1000(&self) -> f64 {
        self.diffusivity * DIFFUSIVITY_DISPLAY_SCALE
    }
}

/// Enchaîne les quatre formules. Toute erreur de domaine, y compris une
/// valeur infinie ou NaN, est levée avant qu'une valeur ne soit retournée.
pub fn compute_thermal_profile(input: MaterialInput) -> Result<ThermalProfile, ThermalError> {
    debug!("entrées: {input:?}");
    let capacity = thermal_capacity(input.density, input.specific_heat);
    let profile = ensure_finite(keys::FIELD_THERMAL_CAPACITY, capacity)
        .and_then(|capacity| diffusivity(input.conductivity, capacity))
        .and_then(|d| {
            Ok(ThermalProfile {
                input,
                thermal_capacity: capacity,
                diffusivity: d,
                transfer_speed: transfer_speed(d)?,
                phase_shift: phase_shift(d, input.thickness)?,
            })
        });
    match &profile {
        Ok(p) => debug!(
            "C={} Wh/m3.°C d={} m2/h v={} cm/h D={} h",
            p.thermal_capacity, p.diffusivity, p.transfer_speed, p.phase_shift
        ),
        Err(e) => debug!("calcul impossible: {e}"),
    }
    profile
}
