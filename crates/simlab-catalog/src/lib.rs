//! SimLab Parameter Catalog
//!
//! Static metadata for the physiological parameters a scenario frame can
//! carry.
//!
//! # Core Concepts
//!
//! - [`ParameterKey`]: Closed, typed set of parameter keys
//! - [`ParameterCategory`]: Grouping used for icons and sections
//! - [`ParameterCatalog`]: Total lookups for label, unit and category
//!
//! # Example
//!
//! ```
//! use simlab_catalog::{ParameterCatalog, ParameterCategory, ParameterKey};
//!
//! assert_eq!(ParameterCatalog::unit_of(ParameterKey::HeartRate), "bpm");
//! assert_eq!(
//!     ParameterCatalog::icon_category_of(ParameterKey::HeartRate),
//!     ParameterCategory::Circulatory
//! );
//!
//! // Wire-level keys never fail, unknown ones fall back to the raw key
//! assert_eq!(ParameterCatalog::label_of_raw("lactate"), "lactate");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod catalog;
mod key;

pub use catalog::{CatalogEntry, ParameterCatalog};
pub use key::{ParameterCategory, ParameterKey, ParseKeyError, ValueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
