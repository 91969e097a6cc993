//! ft-table: property-table generation for fluidtab.
//!
//! Turns a validated temperature/pressure grid into a flat table of density,
//! viscosity and enthalpy by querying one isotherm per temperature:
//!
//! 1. grid: temperature points and the pressure sweep
//! 2. query + fetch through an `IsothermSource`
//! 3. parse the tab-delimited response
//! 4. drop duplicated phase-boundary samples
//! 5. convert viscosity and enthalpy to SI
//! 6. append rows in temperature order and write the table file

pub mod assemble;
pub mod config;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod phase;
pub mod progress;
pub mod table;

// Re-export key types for convenience
pub use assemble::{generate_table, generate_table_with_progress, process_isotherm};
pub use config::{GenerationOptions, TableConfig, ValidatedConfig};
pub use error::{TableError, TableResult};
pub use grid::{PressureSweep, SamplingGrid, TemperatureGrid};
pub use normalize::{enthalpy_to_si, normalize_units, viscosity_to_si};
pub use phase::{phase_boundary_indices, remove_phase_boundaries};
pub use progress::{GenerationProgressEvent, GenerationStage, IsothermProgress};
pub use table::{OutputTable, PropertyRow};
