//! Fixed request conventions shared by every isotherm query.

/// Unit selections, precision and reference state sent with each request.
///
/// The service reports values in exactly these units, so the response parser
/// and the unit normalizer rely on them. `Default` gives the table layout used
/// throughout fluidtab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConventions {
    pub action: &'static str,
    pub wide: bool,
    pub sweep_type: &'static str,
    pub digits: u8,
    /// Enthalpy zero point. `DEF` selects the fluid's default, which for
    /// H2O and CO2 is the IIR convention (200 kJ/kg at 0 °C, saturated liquid).
    pub reference_state: &'static str,
    pub temperature_unit: &'static str,
    pub pressure_unit: &'static str,
    pub density_unit: &'static str,
    pub enthalpy_unit: &'static str,
    pub speed_unit: &'static str,
    pub viscosity_unit: &'static str,
    pub surface_tension_unit: &'static str,
}

impl Default for ServiceConventions {
    fn default() -> Self {
        Self {
            action: "Data",
            wide: true,
            sweep_type: "IsoTherm",
            digits: 12,
            reference_state: "DEF",
            temperature_unit: "C",
            pressure_unit: "Pa",
            density_unit: "kg/m3",
            enthalpy_unit: "kJ/kg",
            speed_unit: "m/s",
            viscosity_unit: "uPas",
            surface_tension_unit: "N/m",
        }
    }
}
