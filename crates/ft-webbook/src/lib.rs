//! ft-webbook: access to the NIST Chemistry WebBook fluid-property service.
//!
//! Provides:
//! - Component identities understood by the service (H2O, CO2)
//! - Fixed unit and reference-state conventions for every request
//! - Isotherm query construction (URL-encoded parameter sets)
//! - Parsing of the tab-delimited isotherm response
//! - `IsothermSource` trait plus a blocking HTTP client
//!
//! # Architecture
//!
//! The rest of fluidtab only sees the `IsothermSource` trait, so the HTTP
//! backend can be swapped for an in-memory source in tests.
//!
//! # Example
//!
//! ```no_run
//! use ft_webbook::{Component, IsothermQuery, IsothermResponse, IsothermSource, WebBookClient};
//! use std::time::Duration;
//!
//! let client = WebBookClient::new(Duration::from_secs(30));
//! let query = IsothermQuery::new(Component::H2O, 25.0, 1.0e5, 1.0e6, 4.5e5);
//! let body = client.fetch(&query).unwrap();
//! let response = IsothermResponse::parse(&body).unwrap();
//! println!("{} samples", response.len());
//! ```

pub mod client;
pub mod component;
pub mod conventions;
pub mod error;
pub mod query;
pub mod response;

// Re-exports for ergonomics
pub use client::{DEFAULT_ENDPOINT, IsothermSource, WebBookClient};
pub use component::Component;
pub use conventions::ServiceConventions;
pub use error::{WebBookError, WebBookResult};
pub use query::IsothermQuery;
pub use response::IsothermResponse;
