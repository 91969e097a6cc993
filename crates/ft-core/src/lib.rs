//! ft-core: shared foundation for fluidtab.
//!
//! Contains:
//! - units (Celsius handling via uom, table conversion factors)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
