//! The package measurement model.
//!
//! A [`Package`] models one physical parcel: a weight, three dimensions
//! normalized smallest-to-largest, a declared monetary value, and shape and
//! handling flags. Weight and dimensions each resolve a unit system from
//! explicit options or from the unit tags the inputs carry, and all derived
//! measures (girth, volume, volumetric and billable weight) are computed on
//! demand from the immutable stored quantities.

use crate::money::{cents_from, Money};
use parcelpack_measure::{Length, LengthUnit, Mass, MassUnit, UnitSystem};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Divisor applied to volume in cm³ to obtain volumetric weight in grams
/// (the 6000 cm³/kg carrier convention).
const VOLUMETRIC_DIVISOR: f64 = 6.0;

/// A weight input: either a raw number interpreted against the resolved unit
/// system, or an already-tagged quantity used as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightInput {
    /// Raw value; grams under metric, ounces under imperial.
    Raw(f64),
    /// Tagged quantity; its own unit wins over any option.
    Tagged(Mass),
}

impl From<f64> for WeightInput {
    fn from(value: f64) -> Self {
        Self::Raw(value)
    }
}

impl From<Mass> for WeightInput {
    fn from(mass: Mass) -> Self {
        Self::Tagged(mass)
    }
}

/// A dimension input: raw number or tagged length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DimensionInput {
    /// Raw value; centimetres under metric, inches under imperial.
    Raw(f64),
    /// Tagged quantity; converted into the resolved dimension unit.
    Tagged(Length),
}

impl From<f64> for DimensionInput {
    fn from(value: f64) -> Self {
        Self::Raw(value)
    }
}

impl From<Length> for DimensionInput {
    fn from(length: Length) -> Self {
        Self::Tagged(length)
    }
}

/// Semantic axis into the normalized (ascending) dimension array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Smallest dimension (index 0).
    Height,
    /// Middle dimension (index 1).
    Width,
    /// Largest dimension (index 2).
    Length,
}

impl Axis {
    /// Index of this axis into the normalized dimension array.
    pub fn index(&self) -> usize {
        match self {
            Self::Height => 0,
            Self::Width => 1,
            Self::Length => 2,
        }
    }
}

/// Which notion of weight to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightKind {
    /// The stored scale weight.
    #[default]
    Actual,
    /// Dimensional weight derived from volume.
    Volumetric,
    /// The greater of actual and volumetric.
    Billable,
}

/// Construction options for [`Package`].
///
/// Explicit and caller-owned: there are no process-wide defaults. Callers that
/// want shared defaults hold one of these and clone it per construction.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageOptions {
    /// Default unit system for both weight and dimensions.
    pub units: Option<UnitSystem>,
    /// Overrides `units` for the weight only.
    pub weight_units: Option<UnitSystem>,
    /// Overrides `units` for the dimensions only.
    pub dim_units: Option<UnitSystem>,
    /// Declared monetary value.
    pub value: Option<Money>,
    /// ISO currency code for the declared value.
    pub currency: Option<String>,
    /// The parcel is a cylinder/tube rather than a rectangular box.
    pub cylinder: bool,
    /// The parcel is a gift.
    pub gift: bool,
    /// The parcel is oversized.
    pub oversized: bool,
    /// The contents ship without outer packaging.
    pub unpackaged: bool,
}

impl PackageOptions {
    /// Creates options with all defaults (metric, no value, no flags).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default unit system for weight and dimensions.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    /// Sets the unit system for the weight only.
    pub fn with_weight_units(mut self, units: UnitSystem) -> Self {
        self.weight_units = Some(units);
        self
    }

    /// Sets the unit system for the dimensions only.
    pub fn with_dim_units(mut self, units: UnitSystem) -> Self {
        self.dim_units = Some(units);
        self
    }

    /// Sets the declared monetary value.
    pub fn with_value(mut self, value: impl Into<Money>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the currency code.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Marks the parcel as a cylinder/tube.
    pub fn with_cylinder(mut self, cylinder: bool) -> Self {
        self.cylinder = cylinder;
        self
    }

    /// Marks the parcel as a gift.
    pub fn with_gift(mut self, gift: bool) -> Self {
        self.gift = gift;
        self
    }

    /// Marks the parcel as oversized.
    pub fn with_oversized(mut self, oversized: bool) -> Self {
        self.oversized = oversized;
        self
    }

    /// Marks the contents as unpackaged.
    pub fn with_unpackaged(mut self, unpackaged: bool) -> Self {
        self.unpackaged = unpackaged;
        self
    }
}

/// One physical parcel.
///
/// Immutable after construction. Physical values are not validated: a
/// negative or zero weight passes through into downstream arithmetic, matching
/// how carrier adapters feed unvalidated merchant data into this model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    weight: Mass,
    dimensions: [Length; 3],
    value: Option<i64>,
    currency: Option<String>,
    cylinder: bool,
    gift: bool,
    oversized: bool,
    unpackaged: bool,
}

impl Package {
    /// Creates a package from a weight, any number of dimensions and options.
    ///
    /// Unit-system resolution, per measure:
    /// 1. `weight_units`/`dim_units` win over `units`;
    /// 2. otherwise `units` applies to both;
    /// 3. otherwise imperial is inferred only when *every* supplied value
    ///    (weight and all dimensions) is a tagged imperial quantity.
    ///
    /// A tagged weight is stored as-is; its own unit always wins. Dimensions
    /// are converted into the resolved length unit, sorted ascending and
    /// padded to exactly three entries by duplicating the smallest (zero
    /// supplied means three zero lengths).
    pub fn new<W, I, D>(weight: W, dimensions: I, options: PackageOptions) -> Self
    where
        W: Into<WeightInput>,
        I: IntoIterator<Item = D>,
        D: Into<DimensionInput>,
    {
        let weight = weight.into();
        let dims: Vec<DimensionInput> = dimensions.into_iter().map(Into::into).collect();

        let inferred = infer_system(&weight, &dims);
        let weight_system = options.weight_units.or(options.units).unwrap_or(inferred);
        let dim_system = options.dim_units.or(options.units).unwrap_or(inferred);

        let weight = match weight {
            WeightInput::Tagged(mass) => mass,
            WeightInput::Raw(value) => match weight_system {
                UnitSystem::Metric => Mass::grams(value),
                UnitSystem::Imperial => Mass::ounces(value),
            },
        };

        let dim_unit = match dim_system {
            UnitSystem::Metric => LengthUnit::Centimetres,
            UnitSystem::Imperial => LengthUnit::Inches,
        };
        let dimensions = normalize_dimensions(&dims, dim_unit);

        Self {
            weight,
            dimensions,
            value: options.value.and_then(|v| cents_from(Some(v))),
            currency: options.currency,
            cylinder: options.cylinder,
            gift: options.gift,
            oversized: options.oversized,
            unpackaged: options.unpackaged,
        }
    }

    /// The stored (actual) weight.
    pub fn weight(&self) -> &Mass {
        &self.weight
    }

    /// The weight under the requested interpretation.
    ///
    /// `Volumetric` (also called dimensional weight) is volume-in-cm³ divided
    /// by 6, as grams, converted into the package's weight unit. `Billable`
    /// is the greater of actual and volumetric.
    pub fn weight_of(&self, kind: WeightKind) -> Mass {
        match kind {
            WeightKind::Actual => self.weight,
            WeightKind::Volumetric => self.volumetric_weight(),
            WeightKind::Billable => self.weight.max(self.volumetric_weight()),
        }
    }

    /// Actual weight in grams.
    pub fn grams(&self) -> f64 {
        self.weight.in_unit(MassUnit::Grams)
    }

    /// Actual weight in ounces.
    pub fn ounces(&self) -> f64 {
        self.weight.in_unit(MassUnit::Ounces)
    }

    /// Actual weight in pounds.
    pub fn pounds(&self) -> f64 {
        self.weight.in_unit(MassUnit::Pounds)
    }

    /// Actual weight in kilograms.
    pub fn kilograms(&self) -> f64 {
        self.weight.in_unit(MassUnit::Kilograms)
    }

    /// The normalized dimensions, ascending.
    pub fn dimensions(&self) -> &[Length; 3] {
        &self.dimensions
    }

    /// All three dimensions in centimetres, ascending.
    pub fn centimetres(&self) -> [f64; 3] {
        self.dimensions_in(LengthUnit::Centimetres)
    }

    /// All three dimensions in inches, ascending.
    pub fn inches(&self) -> [f64; 3] {
        self.dimensions_in(LengthUnit::Inches)
    }

    /// One dimension by semantic axis, in the given unit.
    pub fn dimension(&self, axis: Axis, unit: LengthUnit) -> f64 {
        self.dimensions[axis.index()].in_unit(unit)
    }

    /// Girth in the given unit: circumference over the two smaller axes for a
    /// cylinder, twice their sum for a box.
    pub fn girth(&self, unit: LengthUnit) -> f64 {
        let d = self.dimensions_in(unit);
        if self.cylinder {
            PI * (d[0] + d[1]) / 2.0
        } else {
            2.0 * d[0] + 2.0 * d[1]
        }
    }

    /// Volume in cubic units of the given unit.
    ///
    /// For a cylinder the radius is taken from the mean of the two smaller
    /// axes and the largest axis is the height.
    pub fn volume(&self, unit: LengthUnit) -> f64 {
        let d = self.dimensions_in(unit);
        if self.cylinder {
            let radius = (d[0] + d[1]) / 4.0;
            PI * radius * radius * d[2]
        } else {
            d[0] * d[1] * d[2]
        }
    }

    /// Declared value in integer cents.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Currency code for the declared value.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Whether the parcel is a cylinder.
    pub fn is_cylinder(&self) -> bool {
        self.cylinder
    }

    /// Alias for [`is_cylinder`](Self::is_cylinder).
    pub fn is_tube(&self) -> bool {
        self.cylinder
    }

    /// Whether the parcel is a gift.
    pub fn is_gift(&self) -> bool {
        self.gift
    }

    /// Whether the parcel is oversized.
    pub fn is_oversized(&self) -> bool {
        self.oversized
    }

    /// Whether the contents ship without outer packaging.
    pub fn is_unpackaged(&self) -> bool {
        self.unpackaged
    }

    fn dimensions_in(&self, unit: LengthUnit) -> [f64; 3] {
        [
            self.dimensions[0].in_unit(unit),
            self.dimensions[1].in_unit(unit),
            self.dimensions[2].in_unit(unit),
        ]
    }

    fn volumetric_weight(&self) -> Mass {
        let cm3 = self.volume(LengthUnit::Centimetres);
        Mass::grams(cm3 / VOLUMETRIC_DIVISOR).convert_to(self.weight.unit())
    }
}

/// Imperial only when every supplied value carries an explicit imperial tag.
fn infer_system(weight: &WeightInput, dims: &[DimensionInput]) -> UnitSystem {
    let weight_imperial = match weight {
        WeightInput::Tagged(mass) => mass.system().is_imperial(),
        WeightInput::Raw(_) => false,
    };
    let dims_imperial = dims.iter().all(|d| match d {
        DimensionInput::Tagged(length) => length.system().is_imperial(),
        DimensionInput::Raw(_) => false,
    });

    if weight_imperial && dims_imperial {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    }
}

/// Sorts ascending, keeps the three largest when more are supplied, and pads
/// to three by duplicating the smallest (three zeros when none supplied).
fn normalize_dimensions(dims: &[DimensionInput], unit: LengthUnit) -> [Length; 3] {
    let mut values: Vec<f64> = dims
        .iter()
        .map(|d| match d {
            DimensionInput::Raw(value) => *value,
            DimensionInput::Tagged(length) => length.in_unit(unit),
        })
        .collect();
    values.sort_by(|a, b| a.total_cmp(b));

    if values.len() > 3 {
        values.drain(..values.len() - 3);
    }
    while values.len() < 3 {
        let smallest = values.first().copied().unwrap_or(0.0);
        values.insert(0, smallest);
    }

    [
        Length::new(values[0], unit),
        Length::new(values[1], unit),
        Length::new(values[2], unit),
    ]
}
