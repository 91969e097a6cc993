//! Isotherm query construction.
//!
//! One query describes a pressure sweep at a single temperature. Building the
//! query string is a pure function of the query and the conventions.

use crate::component::Component;
use crate::conventions::ServiceConventions;
use url::form_urlencoded;

/// Parameters of one isothermal pressure sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermQuery {
    pub component: Component,
    /// Temperature [°C]
    pub temperature_c: f64,
    /// Lowest pressure of the sweep [Pa]
    pub pressure_low_pa: f64,
    /// Highest pressure of the sweep [Pa]
    pub pressure_high_pa: f64,
    /// Pressure increment [Pa]
    pub pressure_increment_pa: f64,
}

impl IsothermQuery {
    pub fn new(
        component: Component,
        temperature_c: f64,
        pressure_low_pa: f64,
        pressure_high_pa: f64,
        pressure_increment_pa: f64,
    ) -> Self {
        Self {
            component,
            temperature_c,
            pressure_low_pa,
            pressure_high_pa,
            pressure_increment_pa,
        }
    }

    /// Ordered request parameters.
    pub fn params(&self, conventions: &ServiceConventions) -> Vec<(&'static str, String)> {
        vec![
            ("Action", conventions.action.to_string()),
            ("Wide", if conventions.wide { "on" } else { "off" }.to_string()),
            ("ID", self.component.webbook_id().to_string()),
            ("Type", conventions.sweep_type.to_string()),
            ("Digits", conventions.digits.to_string()),
            ("PLow", format_param(self.pressure_low_pa)),
            ("PHigh", format_param(self.pressure_high_pa)),
            ("PInc", format_param(self.pressure_increment_pa)),
            ("T", format_param(self.temperature_c)),
            ("RefState", conventions.reference_state.to_string()),
            ("TUnit", conventions.temperature_unit.to_string()),
            ("PUnit", conventions.pressure_unit.to_string()),
            ("DUnit", conventions.density_unit.to_string()),
            ("HUnit", conventions.enthalpy_unit.to_string()),
            ("WUnit", conventions.speed_unit.to_string()),
            ("VisUnit", conventions.viscosity_unit.to_string()),
            ("STUnit", conventions.surface_tension_unit.to_string()),
        ]
    }

    /// URL-encoded query string (`Action=Data&Wide=on&...`).
    pub fn query_string(&self, conventions: &ServiceConventions) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.params(conventions) {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Full request URL for the given endpoint.
    pub fn url(&self, endpoint: &str, conventions: &ServiceConventions) -> String {
        format!("{}?{}", endpoint, self.query_string(conventions))
    }
}

/// Shortest representation that round-trips, always with a decimal part
/// for integral values (`100000.0`).
fn format_param(v: f64) -> String {
    format!("{:?}", v)
}
