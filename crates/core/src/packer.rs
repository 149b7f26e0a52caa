//! Greedy weight-bounded shipment packing.
//!
//! [`ShipmentPacker::pack`] consolidates flat line items into a sequence of
//! [`Package`]s, each within a caller-supplied weight ceiling. Dimensions are
//! not used for capacity; they are attached to every output package as a fixed
//! label, because the target box shape is chosen by the caller.
//!
//! The heuristic is deliberate and load-bearing: items are sorted lightest
//! first and each box is filled in a single pass over the remaining items, so
//! small items top off capacity before heavy ones dominate. Callers depend on
//! the resulting box/item distribution, so this must not be swapped for a
//! smarter bin-packing solver.

use crate::error::{Error, Result};
use crate::money::{cents_from, Money};
use crate::package::{Package, PackageOptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One line item to pack: a quantity of identical units with a per-unit
/// weight and price.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineItem {
    /// Number of units.
    pub quantity: u64,
    /// Weight of one unit, in grams.
    pub grams: f64,
    /// Price of one unit.
    pub price: Money,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(quantity: u64, grams: f64, price: impl Into<Money>) -> Self {
        Self {
            quantity,
            grams,
            price: price.into(),
        }
    }
}

struct WorkingItem {
    grams: f64,
    price_cents: i64,
    remaining: u64,
}

/// Greedy weight-only bin packer.
pub struct ShipmentPacker;

impl ShipmentPacker {
    /// Safety valve against pathological input: packing aborts if the input
    /// would require more than this many packages, whether detected up front
    /// from the total weight or while emitting boxes.
    pub const EXCESS_PACKAGE_QUANTITY_THRESHOLD: u64 = 10_000;

    /// Packs line items into boxes of the given shape and weight ceiling.
    ///
    /// Returns one [`Package`] per emitted box, in emission order, each with
    /// the aggregated weight (grams) and aggregated value (cents via
    /// [`cents_from`]), the caller's dimensions (centimetres) and currency.
    /// Empty input yields an empty result.
    ///
    /// # Errors
    ///
    /// [`Error::OverweightItem`] if a single unit of any item exceeds
    /// `max_weight_grams`; [`Error::ExcessPackageQuantity`] if the input
    /// would require more than
    /// [`EXCESS_PACKAGE_QUANTITY_THRESHOLD`](Self::EXCESS_PACKAGE_QUANTITY_THRESHOLD)
    /// packages.
    pub fn pack(
        items: &[LineItem],
        dimensions: [f64; 3],
        max_weight_grams: f64,
        currency: &str,
    ) -> Result<Vec<Package>> {
        let threshold = Self::EXCESS_PACKAGE_QUANTITY_THRESHOLD;

        // Fail fast before any packing.
        let mut total_grams = 0.0;
        for item in items {
            if item.grams > max_weight_grams {
                return Err(Error::OverweightItem {
                    grams: item.grams,
                    max_grams: max_weight_grams,
                });
            }
            total_grams += item.quantity as f64 * item.grams;
            if total_grams > max_weight_grams * threshold as f64 {
                return Err(Error::ExcessPackageQuantity {
                    required: (total_grams / max_weight_grams).ceil() as u64,
                    threshold,
                });
            }
        }

        let mut working: Vec<WorkingItem> = items
            .iter()
            .filter(|item| item.quantity > 0)
            .map(|item| WorkingItem {
                grams: item.grams,
                price_cents: cents_from(Some(item.price.clone())).unwrap_or(0),
                remaining: item.quantity,
            })
            .collect();
        // Lightest first, so each box tops off with small items.
        working.sort_by(|a, b| a.grams.total_cmp(&b.grams));

        let mut packages: Vec<Package> = Vec::new();

        while !working.is_empty() {
            let mut box_grams = 0.0;
            let mut box_cents = 0i64;

            for item in working.iter_mut() {
                let fittable = if item.grams <= 0.0 {
                    // Weightless items never consume capacity.
                    item.remaining
                } else {
                    let room = ((max_weight_grams - box_grams) / item.grams).floor();
                    if room <= 0.0 {
                        0
                    } else {
                        (room as u64).min(item.remaining)
                    }
                };
                if fittable == 0 {
                    continue;
                }

                box_grams += fittable as f64 * item.grams;
                box_cents += fittable as i64 * item.price_cents;
                item.remaining -= fittable;
            }

            working.retain(|item| item.remaining > 0);

            log::debug!(
                "closing box {} at {box_grams}g / {max_weight_grams}g, {} item kinds left",
                packages.len() + 1,
                working.len()
            );

            packages.push(Package::new(
                box_grams,
                dimensions,
                PackageOptions::default()
                    .with_value(box_cents)
                    .with_currency(currency),
            ));

            // Coarser safety valve, bounding box count directly.
            if !working.is_empty() && packages.len() as u64 >= threshold {
                return Err(Error::ExcessPackageQuantity {
                    required: packages.len() as u64 + 1,
                    threshold,
                });
            }
        }

        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_packages() {
        let packed = ShipmentPacker::pack(&[], [10.0, 10.0, 10.0], 5000.0, "USD").unwrap();
        assert!(packed.is_empty());
    }

    #[test]
    fn test_overweight_item_detected_before_packing() {
        let items = [LineItem::new(1, 5001.0, 0)];
        let err = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD").unwrap_err();
        match err {
            Error::OverweightItem { grams, max_grams } => {
                assert_eq!(grams, 5001.0);
                assert_eq!(max_grams, 5000.0);
            }
            other => panic!("expected OverweightItem, got {other:?}"),
        }
    }

    #[test]
    fn test_excess_quantity_detected_before_packing() {
        let items = [LineItem::new(1_000_000, 1.0, 0)];
        let err = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 1.0, "USD").unwrap_err();
        assert!(matches!(err, Error::ExcessPackageQuantity { .. }));
    }

    #[test]
    fn test_two_box_split() {
        let items = [LineItem::new(3, 2000.0, 500)];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD").unwrap();

        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].grams(), 4000.0);
        assert_eq!(packed[0].value(), Some(1000));
        assert_eq!(packed[1].grams(), 2000.0);
        assert_eq!(packed[1].value(), Some(500));
        for package in &packed {
            assert!(package.grams() <= 5000.0);
            assert_eq!(package.currency(), Some("USD"));
        }
    }

    #[test]
    fn test_lightest_items_fill_first() {
        // 2x heavy (3000g) and 4x light (500g) into 5000g boxes: the light
        // items are considered first, so box one takes all four light units
        // and one heavy unit tops it off exactly; the other heavy unit opens
        // box two.
        let items = [
            LineItem::new(2, 3000.0, 0),
            LineItem::new(4, 500.0, 0),
        ];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD").unwrap();

        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].grams(), 5000.0);
        assert_eq!(packed[1].grams(), 3000.0);
    }

    #[test]
    fn test_weightless_items_never_consume_capacity() {
        let items = [
            LineItem::new(10, 0.0, 100),
            LineItem::new(2, 500.0, 250),
        ];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 1000.0, "USD").unwrap();

        // Everything fits in one box; the weightless units add value only.
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].grams(), 1000.0);
        assert_eq!(packed[0].value(), Some(10 * 100 + 2 * 250));
    }

    #[test]
    fn test_prices_coerce_through_cents() {
        let items = [LineItem::new(2, 100.0, "1.25")];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 1000.0, "USD").unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].value(), Some(250));
    }

    #[test]
    fn test_output_dimensions_are_the_callers_box_shape() {
        let items = [LineItem::new(1, 100.0, 0)];
        let packed = ShipmentPacker::pack(&items, [30.0, 10.0, 20.0], 1000.0, "USD").unwrap();
        assert_eq!(packed[0].centimetres(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_zero_quantity_items_are_skipped() {
        let items = [
            LineItem::new(0, 100.0, 50),
            LineItem::new(1, 100.0, 50),
        ];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 1000.0, "USD").unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].value(), Some(50));
    }
}
