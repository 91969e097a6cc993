//! Output table and its text file format.

use crate::error::{TableError, TableResult};
use crate::grid::SamplingGrid;
use chrono::NaiveDate;
use ft_core::format_exp;
use ft_webbook::Component;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Significant decimals of every number in a data line.
const DATA_DIGITS: usize = 11;

/// One table record in SI units (temperature in °C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRow {
    pub temperature_c: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub enthalpy_j_per_kg: f64,
}

impl PropertyRow {
    /// Data line without trailing newline, e.g.
    /// ` 2.00000000000e+01, 1.00000000000e+05, ...`.
    pub fn to_line(&self) -> String {
        format!(
            " {}, {}, {}, {}, {}",
            format_exp(self.temperature_c, DATA_DIGITS),
            format_exp(self.pressure_pa, DATA_DIGITS),
            format_exp(self.density_kg_m3, DATA_DIGITS),
            format_exp(self.viscosity_pa_s, DATA_DIGITS),
            format_exp(self.enthalpy_j_per_kg, DATA_DIGITS)
        )
    }
}

/// Rows of one generation run, temperature-major and pressure-ascending
/// within each temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    component: Component,
    grid: SamplingGrid,
    rows: Vec<PropertyRow>,
}

impl OutputTable {
    pub fn new(component: Component, grid: SamplingGrid) -> Self {
        let capacity = grid.max_rows();
        Self {
            component,
            grid,
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn component(&self) -> Component {
        self.component
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append the rows of the next isotherm.
    pub fn extend_isotherm(&mut self, rows: impl IntoIterator<Item = PropertyRow>) {
        self.rows.extend(rows);
    }

    pub fn file_name(&self) -> String {
        self.component.table_file_name()
    }

    /// Comment block preceding the data lines.
    pub fn header_lines(&self, retrieved: NaiveDate) -> Vec<String> {
        let t = &self.grid.temperatures;
        let p = &self.grid.pressures;
        vec![
            format!(
                "# This autogenerated file contains thermodynamical properties of {}.",
                self.component.key()
            ),
            "# The data has been obtained by querying the NIST Chemistry WebBook https://doi.org/10.18434/T4D303.".to_string(),
            "#".to_string(),
            "# Concerning temperature and pressure ranges, the following parameters have been used:".to_string(),
            format!(
                "# min temperature = {:?}, max temperature = {:?}, #temperature sampling points = {}",
                t.min_c, t.max_c, t.num_points
            ),
            format!(
                "# min pressure = {:?}, max pressure = {:?}, #pressure sampling points = {}",
                p.min_pa, p.max_pa, p.num_points
            ),
            "#".to_string(),
            "# Please cite: P.J. Linstrom and W.G. Mallard, Eds., NIST Chemistry WebBook, NIST Standard".to_string(),
            "# Reference Database Number 69, National Institute of Standards and Technology, Gaithersburg MD, 20899,".to_string(),
            format!(
                "# https://doi.org/10.18434/T4D303, (retrieved {}).",
                retrieved.format("%Y-%m-%d")
            ),
            "# Enthalpy reference state: IIR convention (200000 J/kg at 0 °C for the saturated liquid).".to_string(),
            "#".to_string(),
            "# temperature [°C],     pressure [Pa],   density [kg/m3],  viscosity [Pa.s],   enthalpy [J/kg]".to_string(),
        ]
    }

    /// Write header and data lines.
    pub fn write_to<W: Write>(&self, mut writer: W, retrieved: NaiveDate) -> io::Result<()> {
        for line in self.header_lines(retrieved) {
            writeln!(writer, "{}", line)?;
        }
        for row in &self.rows {
            writeln!(writer, "{}", row.to_line())?;
        }
        writer.flush()
    }

    /// Write the table to `<dir>/<component>values.csv` and return the path.
    pub fn save(&self, dir: &Path, retrieved: NaiveDate) -> TableResult<PathBuf> {
        let path = dir.join(self.file_name());

        let mut content = Vec::new();
        self.write_to(&mut content, retrieved)
            .map_err(|source| TableError::Output {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, content).map_err(|source| TableError::Output {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
