//! # Parcelpack Measure
//!
//! Measured quantities for the parcelpack shipping engine.
//!
//! A quantity is an immutable `(value, unit)` pair. Mass and length are
//! separate types, so unit kinds can never be silently mixed: a [`Mass`] can
//! only be converted to mass units and a [`Length`] to length units.
//! Conversions are linear and reversible to floating-point tolerance.
//!
//! ## Example
//!
//! ```rust
//! use parcelpack_measure::{Mass, MassUnit};
//!
//! let w = Mass::kilograms(1.5);
//! assert_eq!(w.in_unit(MassUnit::Grams), 1500.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod length;
pub mod mass;

pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement system a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitSystem {
    /// Metric units (grams, kilograms, centimetres).
    #[default]
    Metric,
    /// Imperial units (ounces, pounds, inches).
    Imperial,
}

impl UnitSystem {
    /// Returns true for the imperial system.
    pub fn is_imperial(&self) -> bool {
        matches!(self, Self::Imperial)
    }
}
