//! Line items: the sellable units consolidated into packages.

use crate::money::{cents_from, Money};
use crate::package::WeightInput;
use parcelpack_measure::{Mass, MassUnit, UnitSystem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction options for [`PackageItem`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemOptions {
    /// Unit system for a raw weight input.
    pub units: Option<UnitSystem>,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Harmonized System code for customs.
    pub hs_code: Option<String>,
}

impl ItemOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit system for a raw weight input.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    /// Sets the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Sets the HS code.
    pub fn with_hs_code(mut self, hs_code: impl Into<String>) -> Self {
        self.hs_code = Some(hs_code.into());
        self
    }
}

/// One sellable unit with its own per-unit weight and value.
///
/// Items carry no dimensions, so only the actual weight is defined for them;
/// volumetric and billable interpretations exist on [`Package`](crate::Package)
/// alone.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageItem {
    name: String,
    weight: Mass,
    value: Option<i64>,
    quantity: u32,
    sku: Option<String>,
    hs_code: Option<String>,
}

impl PackageItem {
    /// Creates an item. A raw weight is interpreted against `options.units`
    /// (grams under metric, ounces under imperial); a tagged weight is stored
    /// as-is. Any quantity at or below zero is coerced to 1.
    pub fn new<W, M>(
        name: impl Into<String>,
        weight: W,
        value: Option<M>,
        quantity: i64,
        options: ItemOptions,
    ) -> Self
    where
        W: Into<WeightInput>,
        M: Into<Money>,
    {
        let weight = match weight.into() {
            WeightInput::Tagged(mass) => mass,
            WeightInput::Raw(raw) => match options.units.unwrap_or_default() {
                UnitSystem::Metric => Mass::grams(raw),
                UnitSystem::Imperial => Mass::ounces(raw),
            },
        };

        Self {
            name: name.into(),
            weight,
            value: cents_from(value),
            quantity: quantity.max(1) as u32,
            sku: options.sku,
            hs_code: options.hs_code,
        }
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-unit weight.
    pub fn weight(&self) -> &Mass {
        &self.weight
    }

    /// Per-unit weight in grams.
    pub fn grams(&self) -> f64 {
        self.weight.in_unit(MassUnit::Grams)
    }

    /// Per-unit weight in ounces.
    pub fn ounces(&self) -> f64 {
        self.weight.in_unit(MassUnit::Ounces)
    }

    /// Per-unit weight in pounds.
    pub fn pounds(&self) -> f64 {
        self.weight.in_unit(MassUnit::Pounds)
    }

    /// Per-unit weight in kilograms.
    pub fn kilograms(&self) -> f64 {
        self.weight.in_unit(MassUnit::Kilograms)
    }

    /// Per-unit value in integer cents.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Quantity of this item, at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stock keeping unit.
    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    /// Harmonized System code.
    pub fn hs_code(&self) -> Option<&str> {
        self.hs_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantity_coerced_to_minimum_one() {
        let zero = PackageItem::new("shirt", 150.0, Some(999), 0, ItemOptions::default());
        assert_eq!(zero.quantity(), 1);

        let negative = PackageItem::new("shirt", 150.0, Some(999), -3, ItemOptions::default());
        assert_eq!(negative.quantity(), 1);

        let three = PackageItem::new("shirt", 150.0, Some(999), 3, ItemOptions::default());
        assert_eq!(three.quantity(), 3);
    }

    #[test]
    fn test_raw_weight_follows_units_option() {
        let metric = PackageItem::new("mug", 250.0, None::<i64>, 1, ItemOptions::default());
        assert_relative_eq!(metric.grams(), 250.0, epsilon = 1e-9);

        let imperial = PackageItem::new(
            "mug",
            8.0,
            None::<i64>,
            1,
            ItemOptions::default().with_units(UnitSystem::Imperial),
        );
        assert_relative_eq!(imperial.pounds(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_tagged_weight_kept_as_is() {
        let item = PackageItem::new(
            "book",
            Mass::pounds(1.5),
            None::<i64>,
            1,
            ItemOptions::default().with_units(UnitSystem::Metric),
        );
        assert_eq!(item.weight().unit(), MassUnit::Pounds);
        assert_relative_eq!(item.ounces(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_value_goes_through_cents_coercion() {
        let item = PackageItem::new("vase", 500.0, Some("12.3"), 1, ItemOptions::default());
        assert_eq!(item.value(), Some(1230));
    }

    #[test]
    fn test_sku_and_hs_code() {
        let item = PackageItem::new(
            "vase",
            500.0,
            None::<i64>,
            1,
            ItemOptions::default().with_sku("VASE-01").with_hs_code("6913.90"),
        );
        assert_eq!(item.sku(), Some("VASE-01"));
        assert_eq!(item.hs_code(), Some("6913.90"));
    }
}
