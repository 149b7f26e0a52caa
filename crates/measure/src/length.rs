//! Length quantities.

use crate::UnitSystem;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Units of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    /// Centimetres (metric base unit).
    #[default]
    Centimetres,
    /// Inches.
    Inches,
}

impl LengthUnit {
    /// Centimetres in one of this unit.
    pub fn centimetres_per_unit(&self) -> f64 {
        match self {
            Self::Centimetres => 1.0,
            Self::Inches => 2.54,
        }
    }

    /// Returns the measurement system this unit belongs to.
    pub fn system(&self) -> UnitSystem {
        match self {
            Self::Centimetres => UnitSystem::Metric,
            Self::Inches => UnitSystem::Imperial,
        }
    }

    /// Short unit label.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Centimetres => "cm",
            Self::Inches => "in",
        }
    }
}

/// An immutable length quantity: a value paired with its unit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Creates a length with the given value and unit.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a length in centimetres.
    pub fn centimetres(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimetres)
    }

    /// Creates a length in inches.
    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inches)
    }

    /// Returns the raw value in this length's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Returns the measurement system of the unit.
    pub fn system(&self) -> UnitSystem {
        self.unit.system()
    }

    /// Returns the value expressed in centimetres.
    pub fn in_centimetres(&self) -> f64 {
        self.value * self.unit.centimetres_per_unit()
    }

    /// Returns the value expressed in the given unit.
    pub fn in_unit(&self, unit: LengthUnit) -> f64 {
        self.in_centimetres() / unit.centimetres_per_unit()
    }

    /// Returns an equivalent length expressed in the given unit.
    pub fn convert_to(&self, unit: LengthUnit) -> Self {
        Self::new(self.in_unit(unit), unit)
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.in_centimetres() == other.in_centimetres()
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.in_centimetres().partial_cmp(&other.in_centimetres())
    }
}

impl Add for Length {
    type Output = Length;

    /// Adds two lengths; the result keeps the left-hand unit.
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.in_unit(self.unit), self.unit)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs, self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion_round_trip() {
        let l = Length::inches(10.0);
        assert_relative_eq!(l.in_centimetres(), 25.4, epsilon = 1e-9);

        let back = l.convert_to(LengthUnit::Centimetres).convert_to(LengthUnit::Inches);
        assert_relative_eq!(back.value(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_comparison_crosses_units() {
        assert!(Length::inches(1.0) > Length::centimetres(2.0));
        assert!(Length::inches(1.0) == Length::centimetres(2.54));
    }

    #[test]
    fn test_unit_systems() {
        assert_eq!(LengthUnit::Centimetres.system(), UnitSystem::Metric);
        assert_eq!(LengthUnit::Inches.system(), UnitSystem::Imperial);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::centimetres(30.0).to_string(), "30 cm");
    }
}
