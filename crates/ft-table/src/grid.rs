//! Sampling grid generation.
//!
//! Temperatures are sampled explicitly, one isotherm each. Pressures are only
//! described by (low, high, increment); the service expands the sweep itself.

use crate::error::{TableError, TableResult};
use ft_core::{celsius_to_kelvin, ensure_finite};
use std::fmt;

/// Evenly spaced temperature points, endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureGrid {
    /// First temperature [°C]
    pub min_c: f64,
    /// Last temperature [°C]
    pub max_c: f64,
    /// Number of points (≥ 1)
    pub num_points: usize,
}

impl TemperatureGrid {
    pub fn new(min_c: f64, max_c: f64, num_points: usize) -> TableResult<Self> {
        ensure_finite(min_c, "min temperature")?;
        ensure_finite(max_c, "max temperature")?;

        if num_points < 1 {
            return Err(TableError::Configuration(
                "n_temp needs to be at least 1".to_string(),
            ));
        }
        if celsius_to_kelvin(min_c.min(max_c)) < 0.0 {
            return Err(TableError::Configuration(format!(
                "temperature range {} .. {} °C is below absolute zero",
                min_c, max_c
            )));
        }
        if num_points > 1 && min_c == max_c {
            return Err(TableError::Configuration(
                "min and max temperature must differ when sampling more than one point"
                    .to_string(),
            ));
        }

        Ok(Self {
            min_c,
            max_c,
            num_points,
        })
    }

    /// Spacing between consecutive points; zero for a single point.
    pub fn step(&self) -> f64 {
        if self.num_points <= 1 {
            0.0
        } else {
            (self.max_c - self.min_c) / (self.num_points - 1) as f64
        }
    }

    /// Generate all temperature points [°C].
    pub fn points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.min_c];
        }

        let delta = self.step();
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.min_c + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.max_c;
        points
    }
}

/// Isothermal pressure sweep from `min_pa` to `max_pa`.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSweep {
    /// Lowest pressure [Pa]
    pub min_pa: f64,
    /// Highest pressure [Pa]
    pub max_pa: f64,
    /// Number of points (≥ 2)
    pub num_points: usize,
}

impl PressureSweep {
    pub fn new(min_pa: f64, max_pa: f64, num_points: usize) -> TableResult<Self> {
        ensure_finite(min_pa, "min pressure")?;
        ensure_finite(max_pa, "max pressure")?;

        if num_points < 2 {
            return Err(TableError::Configuration(
                "n_press needs to be at least 2".to_string(),
            ));
        }
        if min_pa < 0.0 {
            return Err(TableError::Configuration(format!(
                "min pressure must not be negative (got {} Pa)",
                min_pa
            )));
        }
        if min_pa >= max_pa {
            return Err(TableError::Configuration(format!(
                "min pressure ({} Pa) must be below max pressure ({} Pa)",
                min_pa, max_pa
            )));
        }

        Ok(Self {
            min_pa,
            max_pa,
            num_points,
        })
    }

    /// Uniform pressure increment [Pa].
    pub fn increment(&self) -> f64 {
        (self.max_pa - self.min_pa) / (self.num_points - 1) as f64
    }
}

/// Temperature grid plus the pressure sweep run at every temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    pub temperatures: TemperatureGrid,
    pub pressures: PressureSweep,
}

impl SamplingGrid {
    pub fn new(temperatures: TemperatureGrid, pressures: PressureSweep) -> Self {
        Self {
            temperatures,
            pressures,
        }
    }

    pub fn temperature_points(&self) -> Vec<f64> {
        self.temperatures.points()
    }

    /// Upper bound on the number of table rows.
    pub fn max_rows(&self) -> usize {
        self.temperatures.num_points * self.pressures.num_points
    }
}

impl fmt::Display for SamplingGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T {} .. {} °C ({} points), p {} .. {} Pa ({} points)",
            self.temperatures.min_c,
            self.temperatures.max_c,
            self.temperatures.num_points,
            self.pressures.min_pa,
            self.pressures.max_pa,
            self.pressures.num_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_temperature_points() {
        let grid = TemperatureGrid::new(0.0, 100.0, 5).unwrap();
        let points = grid.points();
        assert_eq!(points, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!((grid.step() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn single_temperature_point() {
        let grid = TemperatureGrid::new(20.0, 80.0, 1).unwrap();
        assert_eq!(grid.points(), vec![20.0]);
        assert_eq!(grid.step(), 0.0);
    }

    #[test]
    fn descending_temperature_range() {
        let grid = TemperatureGrid::new(100.0, 0.0, 3).unwrap();
        assert_eq!(grid.points(), vec![100.0, 50.0, 0.0]);
    }

    #[test]
    fn reject_zero_temperature_points() {
        let err = TemperatureGrid::new(0.0, 100.0, 0).unwrap_err();
        assert!(matches!(err, TableError::Configuration(_)));
    }

    #[test]
    fn reject_below_absolute_zero() {
        let err = TemperatureGrid::new(-300.0, 20.0, 3).unwrap_err();
        assert!(err.to_string().contains("absolute zero"));
    }

    #[test]
    fn reject_identical_temperature_bounds() {
        assert!(TemperatureGrid::new(25.0, 25.0, 4).is_err());
        assert!(TemperatureGrid::new(25.0, 25.0, 1).is_ok());
    }

    #[test]
    fn reject_non_finite_bounds() {
        assert!(TemperatureGrid::new(f64::NAN, 25.0, 2).is_err());
        assert!(PressureSweep::new(1.0e5, f64::INFINITY, 2).is_err());
    }

    #[test]
    fn pressure_increment() {
        let sweep = PressureSweep::new(1.0e5, 1.0e6, 3).unwrap();
        assert!((sweep.increment() - 4.5e5).abs() < 1e-6);
        assert_eq!(sweep.min_pa + sweep.increment(), 5.5e5);
    }

    #[test]
    fn reject_single_pressure_point() {
        for n in [0, 1] {
            let err = PressureSweep::new(1.0e5, 1.0e6, n).unwrap_err();
            assert!(matches!(err, TableError::Configuration(_)));
            assert!(err.to_string().contains("n_press"));
        }
    }

    #[test]
    fn reject_inverted_pressure_range() {
        assert!(PressureSweep::new(1.0e6, 1.0e5, 3).is_err());
        assert!(PressureSweep::new(1.0e5, 1.0e5, 3).is_err());
        assert!(PressureSweep::new(-1.0, 1.0e5, 3).is_err());
    }

    #[test]
    fn grid_row_bound() {
        let grid = SamplingGrid::new(
            TemperatureGrid::new(0.0, 100.0, 2).unwrap(),
            PressureSweep::new(1.0e5, 1.0e6, 3).unwrap(),
        );
        assert_eq!(grid.max_rows(), 6);
        assert!(grid.to_string().contains("2 points"));
    }

    proptest! {
        #[test]
        fn temperature_points_are_uniform(
            min in -200.0f64..500.0,
            span in 0.1f64..1000.0,
            n in 2usize..200,
        ) {
            let max = min + span;
            let grid = TemperatureGrid::new(min, max, n).unwrap();
            let points = grid.points();

            prop_assert_eq!(points.len(), n);
            prop_assert_eq!(points[0], min);
            prop_assert_eq!(points[n - 1], max);
            for pair in points.windows(2) {
                prop_assert!(pair[1] > pair[0]);
                prop_assert!((pair[1] - pair[0] - grid.step()).abs() <= 1e-9 * span.max(1.0));
            }
        }

        #[test]
        fn pressure_sweep_needs_two_points(n in 0usize..2) {
            prop_assert!(PressureSweep::new(1.0e5, 2.0e5, n).is_err());
        }
    }
}
