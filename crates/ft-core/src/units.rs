// ft-core/src/units.rs

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;

pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Absolute temperature in kelvin of a value given in °C.
#[inline]
pub fn celsius_to_kelvin(v: f64) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    degc(v).get::<kelvin>()
}

/// Multiplicative factors from the reference service's units to table units.
pub mod factors {
    /// Viscosity: µPa·s → Pa·s.
    pub const MICROPASCAL_SECOND_TO_PASCAL_SECOND: f64 = 1e-6;

    /// Specific enthalpy: kJ/kg → J/kg.
    pub const KILOJOULE_PER_KG_TO_JOULE_PER_KG: f64 = 1000.0;
}
