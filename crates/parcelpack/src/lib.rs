//! # Parcelpack
//!
//! Package measurement model and greedy shipment packing for multi-carrier
//! shipping clients.
//!
//! This crate provides:
//! - **Measured quantities**: unit-aware mass and length with conversions
//! - **Package modeling**: parcels with normalized dimensions, shape flags and
//!   derived girth/volume/volumetric/billable weight
//! - **Shipment packing**: greedy consolidation of line items into
//!   weight-bounded boxes
//!
//! ## Quick Start
//!
//! ```rust
//! use parcelpack::{LineItem, ShipmentPacker};
//!
//! let items = [LineItem::new(3, 2000.0, 500)];
//! let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD")?;
//! assert_eq!(packed.len(), 2);
//! # Ok::<(), parcelpack::core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Package modeling, packing and value objects.
pub use parcelpack_core as core;

/// Measured mass and length quantities.
pub use parcelpack_measure as measure;

// Re-export commonly used types at root level
pub use parcelpack_core::{
    cents_from, Error, LineItem, Location, Money, Package, PackageItem, PackageOptions,
    RateEstimate, Result, ShipmentPacker, WeightKind,
};
pub use parcelpack_measure::{Length, LengthUnit, Mass, MassUnit, UnitSystem};
