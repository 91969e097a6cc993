//! Parsing of the tab-delimited isotherm response.
//!
//! The body starts with a header row naming every column, e.g.
//! `Temperature (C)\tPressure (Pa)\tDensity (kg/m3)\t...\tPhase`, followed by one
//! row per pressure sample. Columns are looked up by their sanitized header
//! name (`Pressure (Pa)` becomes `Pressure_Pa`); the phase label is always the
//! last field of a row.

use crate::error::{WebBookError, WebBookResult};

pub const PRESSURE_COLUMN: &str = "Pressure_Pa";
pub const DENSITY_COLUMN: &str = "Density_kgm3";
pub const VISCOSITY_COLUMN: &str = "Viscosity_uPas";
pub const ENTHALPY_COLUMN: &str = "Enthalpy_kJkg";

/// Samples of one isotherm as reported by the service, in service units.
///
/// All vectors have the same length and are aligned by row index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsothermResponse {
    pub phase: Vec<String>,
    /// Pressure [Pa]
    pub pressure: Vec<f64>,
    /// Density [kg/m³]
    pub density: Vec<f64>,
    /// Viscosity [µPa·s]
    pub viscosity: Vec<f64>,
    /// Specific enthalpy [kJ/kg]
    pub enthalpy: Vec<f64>,
}

impl IsothermResponse {
    /// Parse a raw response body.
    pub fn parse(body: &str) -> WebBookResult<Self> {
        let mut lines = body
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| WebBookError::malformed("empty response body"))?;

        let columns: Vec<String> = header.split('\t').map(column_key).collect();
        if columns.len() < 2 {
            return Err(WebBookError::malformed(format!(
                "header is not tab-delimited: '{}'",
                truncate(header, 80)
            )));
        }

        let find = |name: &'static str| -> WebBookResult<usize> {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| WebBookError::malformed(format!("missing column '{}'", name)))
        };
        let pressure_idx = find(PRESSURE_COLUMN)?;
        let density_idx = find(DENSITY_COLUMN)?;
        let viscosity_idx = find(VISCOSITY_COLUMN)?;
        let enthalpy_idx = find(ENTHALPY_COLUMN)?;

        let mut response = IsothermResponse::default();
        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != columns.len() {
                return Err(WebBookError::malformed(format!(
                    "line {}: expected {} fields, found {}",
                    line_no + 1,
                    columns.len(),
                    fields.len()
                )));
            }

            let number = |idx: usize| -> WebBookResult<f64> {
                let raw = fields[idx].trim();
                raw.parse::<f64>().map_err(|_| {
                    WebBookError::malformed(format!(
                        "line {}: cannot parse '{}' in column '{}'",
                        line_no + 1,
                        raw,
                        columns[idx]
                    ))
                })
            };

            response.pressure.push(number(pressure_idx)?);
            response.density.push(number(density_idx)?);
            response.viscosity.push(number(viscosity_idx)?);
            response.enthalpy.push(number(enthalpy_idx)?);
            response
                .phase
                .push(fields[fields.len() - 1].trim().to_string());
        }

        Ok(response)
    }

    pub fn len(&self) -> usize {
        self.phase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }
}

/// Header name to lookup key: whitespace becomes `_`, punctuation is dropped.
fn column_key(name: &str) -> String {
    name.trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_alphanumeric() || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
