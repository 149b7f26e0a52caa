//! # Parcelpack Core
//!
//! Package measurement model and greedy shipment packing for multi-carrier
//! shipping.
//!
//! This crate is the in-process core that carrier adapters build on: it models
//! physical parcels with unit-aware weights and dimensions, consolidates line
//! items into weight-bounded boxes, and normalizes money into integer cents.
//!
//! ## Core Components
//!
//! - **Measurement model**: [`Package`] — weight, ascending-normalized
//!   dimensions, shape and handling flags, derived girth/volume and
//!   volumetric/billable weight
//! - **Line items**: [`PackageItem`] — the sellable units consolidated into
//!   packages
//! - **Packing**: [`ShipmentPacker`] — greedy, weight-only bin packing under a
//!   per-box ceiling with fail-fast input validation
//! - **Money boundary**: [`cents_from`] — the canonical money-to-cents
//!   coercion
//! - **Value objects**: [`RateEstimate`], [`Location`] — the shape packed
//!   output feeds into
//!
//! ## Example
//!
//! ```rust
//! use parcelpack_core::{LineItem, ShipmentPacker};
//!
//! let items = [LineItem::new(3, 2000.0, 500)];
//! let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD")?;
//!
//! assert_eq!(packed.len(), 2);
//! assert!(packed.iter().all(|p| p.grams() <= 5000.0));
//! # Ok::<(), parcelpack_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod item;
pub mod money;
pub mod package;
pub mod packer;
pub mod rate;

// Re-exports
pub use error::{Error, Result};
pub use item::{ItemOptions, PackageItem};
pub use money::{cents_from, Money};
pub use package::{
    Axis, DimensionInput, Package, PackageOptions, WeightInput, WeightKind,
};
pub use packer::{LineItem, ShipmentPacker};
pub use rate::{Location, PackageRate, RateEstimate};
