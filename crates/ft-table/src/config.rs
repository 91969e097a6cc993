//! Generation parameters and their validation.

use crate::error::{TableError, TableResult};
use crate::grid::{PressureSweep, SamplingGrid, TemperatureGrid};
use ft_webbook::{Component, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// User-facing table parameters, as given on the command line or in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// First temperature [°C]
    pub min_temp: f64,
    /// Last temperature [°C]
    pub max_temp: f64,
    /// Number of temperature points (≥ 1)
    pub n_temp: usize,
    /// Lowest pressure [Pa]
    pub min_press: f64,
    /// Highest pressure [Pa]
    pub max_press: f64,
    /// Number of pressure points (≥ 2)
    pub n_press: usize,
    /// Component name, `H2O` or `CO2`
    pub component: String,
}

/// Checked configuration, ready for table generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub component: Component,
    pub grid: SamplingGrid,
}

impl TableConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_yaml_file(path: &Path) -> TableResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| TableError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content).map_err(|e| TableError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the sampling grid and resolve the component.
    pub fn validate(&self) -> TableResult<ValidatedConfig> {
        let temperatures = TemperatureGrid::new(self.min_temp, self.max_temp, self.n_temp)?;
        let pressures = PressureSweep::new(self.min_press, self.max_press, self.n_press)?;
        let component: Component = self.component.parse()?;

        Ok(ValidatedConfig {
            component,
            grid: SamplingGrid::new(temperatures, pressures),
        })
    }
}

/// Execution options that do not change the table contents.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Number of isotherms fetched concurrently.
    pub workers: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Service endpoint.
    pub endpoint: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            workers: 4,
            timeout: Duration::from_secs(30),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl GenerationOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> TableConfig {
        TableConfig {
            min_temp: 0.0,
            max_temp: 100.0,
            n_temp: 2,
            min_press: 1.0e5,
            max_press: 1.0e6,
            n_press: 3,
            component: "H2O".to_string(),
        }
    }

    #[test]
    fn validate_water_config() {
        let validated = water().validate().unwrap();
        assert_eq!(validated.component, Component::H2O);
        assert_eq!(validated.grid.temperature_points(), vec![0.0, 100.0]);
        assert!((validated.grid.pressures.increment() - 4.5e5).abs() < 1e-6);
    }

    #[test]
    fn reject_unsupported_component() {
        let config = TableConfig {
            component: "N2".to_string(),
            ..water()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TableError::UnsupportedComponent { ref name } if name == "N2"));
    }

    #[test]
    fn reject_single_pressure_point() {
        let config = TableConfig {
            n_press: 1,
            ..water()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            TableError::Configuration(_)
        ));
    }

    #[test]
    fn parse_yaml() {
        let yaml = "min_temp: 10\nmax_temp: 40\nn_temp: 4\nmin_press: 1.0e5\nmax_press: 2.0e7\nn_press: 50\ncomponent: CO2\n";
        let config = TableConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.n_temp, 4);
        assert_eq!(config.max_press, 2.0e7);
        assert_eq!(config.validate().unwrap().component, Component::CO2);
    }

    #[test]
    fn yaml_rejects_negative_count() {
        let yaml = "min_temp: 10\nmax_temp: 40\nn_temp: -4\nmin_press: 1.0e5\nmax_press: 2.0e7\nn_press: 50\ncomponent: CO2\n";
        assert!(TableConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn missing_config_file() {
        let err = TableConfig::from_yaml_file(Path::new("/nonexistent/fluidtab.yaml")).unwrap_err();
        assert!(matches!(err, TableError::ConfigFile { .. }));
    }

    #[test]
    fn option_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.workers, 4);
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(GenerationOptions::default().with_workers(0).workers, 1);
    }
}
