//! Conversion from service units to table units.

use ft_core::factors::{KILOJOULE_PER_KG_TO_JOULE_PER_KG, MICROPASCAL_SECOND_TO_PASCAL_SECOND};
use ft_webbook::IsothermResponse;

/// µPa·s → Pa·s
#[inline]
pub fn viscosity_to_si(micro_pa_s: f64) -> f64 {
    micro_pa_s * MICROPASCAL_SECOND_TO_PASCAL_SECOND
}

/// kJ/kg → J/kg
#[inline]
pub fn enthalpy_to_si(kj_per_kg: f64) -> f64 {
    kj_per_kg * KILOJOULE_PER_KG_TO_JOULE_PER_KG
}

/// Rescale viscosity and enthalpy in place. Pressure and density are already
/// in table units.
pub fn normalize_units(response: &mut IsothermResponse) {
    response
        .viscosity
        .iter_mut()
        .for_each(|mu| *mu = viscosity_to_si(*mu));
    response
        .enthalpy
        .iter_mut()
        .for_each(|h| *h = enthalpy_to_si(*h));
}
