//! Mass quantities.

use crate::UnitSystem;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Units of mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MassUnit {
    /// Grams (metric base unit).
    #[default]
    Grams,
    /// Avoirdupois ounces.
    Ounces,
    /// Avoirdupois pounds.
    Pounds,
    /// Kilograms.
    Kilograms,
}

impl MassUnit {
    /// Grams in one of this unit.
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            Self::Grams => 1.0,
            Self::Ounces => 28.349523125,
            Self::Pounds => 453.59237,
            Self::Kilograms => 1000.0,
        }
    }

    /// Returns the measurement system this unit belongs to.
    pub fn system(&self) -> UnitSystem {
        match self {
            Self::Grams | Self::Kilograms => UnitSystem::Metric,
            Self::Ounces | Self::Pounds => UnitSystem::Imperial,
        }
    }

    /// Short unit label.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
        }
    }
}

/// An immutable mass quantity: a value paired with its unit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mass {
    value: f64,
    unit: MassUnit,
}

impl Mass {
    /// Creates a mass with the given value and unit.
    pub fn new(value: f64, unit: MassUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a mass in grams.
    pub fn grams(value: f64) -> Self {
        Self::new(value, MassUnit::Grams)
    }

    /// Creates a mass in ounces.
    pub fn ounces(value: f64) -> Self {
        Self::new(value, MassUnit::Ounces)
    }

    /// Creates a mass in pounds.
    pub fn pounds(value: f64) -> Self {
        Self::new(value, MassUnit::Pounds)
    }

    /// Creates a mass in kilograms.
    pub fn kilograms(value: f64) -> Self {
        Self::new(value, MassUnit::Kilograms)
    }

    /// Returns the raw value in this mass's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    pub fn unit(&self) -> MassUnit {
        self.unit
    }

    /// Returns the measurement system of the unit.
    pub fn system(&self) -> UnitSystem {
        self.unit.system()
    }

    /// Returns the value expressed in grams.
    pub fn in_grams(&self) -> f64 {
        self.value * self.unit.grams_per_unit()
    }

    /// Returns the value expressed in the given unit.
    pub fn in_unit(&self, unit: MassUnit) -> f64 {
        self.in_grams() / unit.grams_per_unit()
    }

    /// Returns an equivalent mass expressed in the given unit.
    pub fn convert_to(&self, unit: MassUnit) -> Self {
        Self::new(self.in_unit(unit), unit)
    }

    /// Returns the larger of two masses, comparing in grams.
    pub fn max(self, other: Self) -> Self {
        if other.in_grams() > self.in_grams() {
            other
        } else {
            self
        }
    }
}

impl PartialEq for Mass {
    fn eq(&self, other: &Self) -> bool {
        self.in_grams() == other.in_grams()
    }
}

impl PartialOrd for Mass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.in_grams().partial_cmp(&other.in_grams())
    }
}

impl Add for Mass {
    type Output = Mass;

    /// Adds two masses; the result keeps the left-hand unit.
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.in_unit(self.unit), self.unit)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs, self.unit)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbrev())
    }
}
