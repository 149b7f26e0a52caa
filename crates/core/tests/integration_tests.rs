//! Integration tests for parcelpack-core.

use parcelpack_core::package::WeightKind;
use parcelpack_core::{cents_from, Error, LineItem, PackageOptions, ShipmentPacker};
use parcelpack_measure::{Length, Mass};

mod packer_tests {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        // 3 units of 2000g at 500 cents into 5000g boxes: two units fill the
        // first box, the third opens a second.
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
            assert_eq!(package.centimetres(), [10.0, 10.0, 10.0]);
        }
    }

    #[test]
    fn test_empty_input() {
        let packed = ShipmentPacker::pack(&[], [10.0, 10.0, 10.0], 5000.0, "USD").unwrap();
        assert!(packed.is_empty());
    }

    #[test]
    fn test_overweight_item_aborts_the_whole_call() {
        let items = [
            LineItem::new(5, 100.0, 10),
            LineItem::new(1, 5001.0, 10),
        ];
        let err = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 5000.0, "USD").unwrap_err();
        assert!(matches!(err, Error::OverweightItem { .. }));

        let message = err.to_string();
        assert!(message.contains("5001"), "message was: {message}");
        assert!(message.contains("5000"), "message was: {message}");
    }

    #[test]
    fn test_excess_quantity_by_running_weight() {
        let items = [LineItem::new(1_000_000, 1.0, 0)];
        let err = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 1.0, "USD").unwrap_err();
        assert!(matches!(err, Error::ExcessPackageQuantity { .. }));
    }

    #[test]
    fn test_value_conservation() {
        let items = [
            LineItem::new(7, 300.0, "1.25"),
            LineItem::new(3, 1200.0, 999),
            LineItem::new(5, 0.0, 40),
        ];
        let packed = ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], 2000.0, "USD").unwrap();

        let expected: i64 = items
            .iter()
            .map(|item| item.quantity as i64 * cents_from(Some(item.price.clone())).unwrap())
            .sum();
        let total: i64 = packed.iter().map(|p| p.value().unwrap_or(0)).sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_weight_ceiling_holds_for_random_inputs() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let max_weight = rng.gen_range(500..5000) as f64;
            let item_count = rng.gen_range(1..8);
            let items: Vec<LineItem> = (0..item_count)
                .map(|_| {
                    LineItem::new(
                        rng.gen_range(1..20),
                        rng.gen_range(1..=max_weight as u64) as f64,
                        rng.gen_range(0..10_000i64),
                    )
                })
                .collect();

            let packed =
                ShipmentPacker::pack(&items, [10.0, 10.0, 10.0], max_weight, "USD").unwrap();

            assert!(!packed.is_empty());
            for package in &packed {
                assert!(
                    package.grams() <= max_weight,
                    "box at {}g exceeds ceiling {}g",
                    package.grams(),
                    max_weight
                );
            }

            let total_in: f64 = items.iter().map(|i| i.quantity as f64 * i.grams).sum();
            let total_out: f64 = packed.iter().map(|p| p.grams()).sum();
            assert!((total_in - total_out).abs() < 1e-6);
        }
    }
}

mod package_tests {
    use super::*;
    use parcelpack_core::Package;

    #[test]
    fn test_packed_output_feeds_carrier_accessors() {
        let items = [LineItem::new(2, 2268.0, 500)];
        let packed = ShipmentPacker::pack(&items, [20.0, 30.0, 40.0], 10_000.0, "USD").unwrap();

        // Carrier request builders read unit-converted accessors off the
        // packed boxes.
        let package = &packed[0];
        assert!((package.pounds() - 10.0).abs() < 0.01);
        let inches = package.inches();
        assert!((inches[2] - 40.0 / 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_billable_weight_monotonicity() {
        let package = Package::new(
            Mass::grams(500.0),
            [Length::centimetres(40.0), Length::centimetres(40.0), Length::centimetres(40.0)],
            PackageOptions::default(),
        );

        let actual = package.weight_of(WeightKind::Actual);
        let volumetric = package.weight_of(WeightKind::Volumetric);
        let billable = package.weight_of(WeightKind::Billable);

        assert!(billable >= actual);
        assert!(billable >= volumetric);
    }
}
