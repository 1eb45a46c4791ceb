use super::{ensure_finite, ThermalError};
use crate::i18n::keys;

/// Capacité thermique volumique C = ρ · c.
///
/// - `density` : masse volumique ρ (kg/m3)
/// - `specific_heat` : chaleur spécifique c (Wh/kg.°C)
///
/// Résultat en Wh/m3.°C.
pub fn thermal_capacity(density: f64, specific_heat: f64) -> f64 {
    density * specific_heat
}

/// Diffusivité d = λ / C, en m2/h.
///
/// Une capacité nulle est refusée plutôt que de produire une valeur infinie,
/// de même qu'une capacité si petite que le quotient déborde.
pub fn diffusivity(conductivity: f64, thermal_capacity: f64) -> Result<f64, ThermalError> {
    if thermal_capacity == 0.0 {
        return Err(ThermalError::ZeroThermalCapacity);
    }
    ensure_finite(keys::FIELD_DIFFUSIVITY, conductivity / thermal_capacity)
}
