//! Integration tests for stowage-packer.

use approx::assert_relative_eq;
use stowage_packer::{
    Config, Container, ContainerOptimizer, Error, FirstFitDecreasing, Item, Outcome,
    PackingStrategy, Point, Priority, Rotation,
};

/// Asserts every invariant an outcome must hold for the given input.
fn assert_invariants(outcome: &Outcome, container: &Container, items: &[Item]) {
    let bounds = container.extent();
    let packed = outcome.packed();

    for p in packed {
        let b = p.aabb();
        assert!(b.min.x >= 0.0 && b.min.y >= 0.0 && b.min.z >= 0.0);
        assert!(b.within(&bounds, Config::default().tolerance), "{:?} escapes", p);
    }

    for (i, a) in packed.iter().enumerate() {
        for b in &packed[i + 1..] {
            assert!(
                !a.overlaps(b),
                "'{}' overlaps '{}'",
                a.item().label(),
                b.item().label()
            );
        }
    }

    assert!(outcome.total_weight() <= container.max_weight() + 1e-9);

    let mut seen: Vec<_> = packed
        .iter()
        .map(|p| p.item().id())
        .chain(outcome.unpacked().iter().map(Item::id))
        .collect();
    seen.sort_by_key(|id| id.get());
    let mut expected: Vec<_> = items.iter().map(Item::id).collect();
    expected.sort_by_key(|id| id.get());
    assert_eq!(seen, expected, "every item appears exactly once");

    let volume: f64 = packed.iter().map(|p| p.item().volume()).sum();
    assert_relative_eq!(
        outcome.space_utilization(),
        volume / container.volume(),
        epsilon = 1e-9
    );
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_box_at_origin() {
        let container = Container::new(100.0, 100.0, 100.0, 1000.0).unwrap();
        let items = vec![Item::new("Box1", 30.0, 20.0, 10.0, 5.0, Priority::Medium).unwrap()];

        let outcome = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();

        assert_eq!(outcome.packed_count(), 1);
        let p = &outcome.packed()[0];
        assert_eq!(p.position(), Point::ORIGIN);
        assert_eq!(p.rotation(), Rotation::Identity);
        assert_relative_eq!(outcome.space_utilization(), 0.006, epsilon = 1e-9);
        assert_eq!(outcome.container(), &container);
    }

    #[test]
    fn test_capacity_exceeded() {
        let container = Container::new(100.0, 100.0, 100.0, 10.0).unwrap();
        let items = vec![Item::new("Heavy Box", 30.0, 20.0, 10.0, 50.0, Priority::Medium).unwrap()];

        let err = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded(_)));
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_item_too_large() {
        let container = Container::new(100.0, 100.0, 100.0, 1000.0).unwrap();
        let items = vec![Item::new("Huge Box", 200.0, 200.0, 200.0, 5.0, Priority::Medium).unwrap()];

        let err = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap_err();
        assert!(matches!(err, Error::ItemTooLarge(_)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_heavy_forms_base() {
        let container = Container::new(100.0, 100.0, 50.0, 1000.0).unwrap();
        let items = vec![
            Item::new("Fragile", 30.0, 20.0, 10.0, 2.0, Priority::Fragile).unwrap(),
            Item::new("Heavy", 40.0, 30.0, 20.0, 50.0, Priority::Heavy).unwrap(),
        ];

        let outcome = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();

        assert_eq!(outcome.packed_count(), 2);
        let find = |priority| {
            outcome
                .packed()
                .iter()
                .find(|p| p.item().priority() == priority)
                .unwrap()
        };
        let heavy = find(Priority::Heavy);
        let fragile = find(Priority::Fragile);

        assert_eq!(heavy.position(), Point::ORIGIN);
        assert!(heavy.position().z <= fragile.position().z);
        assert_invariants(&outcome, &container, &items);
    }

    #[test]
    fn test_zero_items() {
        let container = Container::new(100.0, 100.0, 100.0, 1000.0).unwrap();
        let outcome = ContainerOptimizer::new().optimize(&container, &[]).unwrap();

        assert!(outcome.packed().is_empty());
        assert!(outcome.unpacked().is_empty());
        assert!(outcome.is_fully_packed());
        assert_eq!(outcome.space_utilization(), 0.0);
    }

    #[test]
    fn test_multiple_items() {
        let container = Container::new(100.0, 100.0, 100.0, 1000.0).unwrap();
        let items = vec![
            Item::new("Box1", 30.0, 20.0, 10.0, 5.0, Priority::Heavy).unwrap(),
            Item::new("Box2", 25.0, 15.0, 10.0, 3.0, Priority::Medium).unwrap(),
            Item::new("Box3", 20.0, 10.0, 5.0, 1.0, Priority::Light).unwrap(),
        ];

        let outcome = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();

        assert!(outcome.is_fully_packed());
        assert!(outcome.space_utilization() > 0.0);
        assert_invariants(&outcome, &container, &items);
    }

    #[test]
    fn test_fragile_blocks_everything_above_its_top() {
        // Nothing may start above a fragile item's top face, even far away.
        let container = Container::new(100.0, 10.0, 30.0, 1000.0).unwrap();
        let items = vec![
            Item::new("base", 90.0, 10.0, 20.0, 5.0, Priority::Medium).unwrap(),
            Item::new("glass", 10.0, 10.0, 10.0, 1.0, Priority::Fragile).unwrap(),
            Item::new("vase", 10.0, 10.0, 10.0, 1.0, Priority::Fragile)
                .unwrap()
                .with_rotation(false),
        ];

        let outcome = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();

        // "glass" takes the last floor slot at x = 90; "vase" would have to
        // rest on the base at z = 20, which is above the glass's top.
        let glass = &outcome.packed()[1];
        assert_eq!(glass.item().label(), "glass");
        assert_eq!(glass.position(), Point::new(90.0, 0.0, 0.0));
        assert_eq!(outcome.unpacked().len(), 1);
        assert_eq!(outcome.unpacked()[0].label(), "vase");
    }
}

mod strategy_tests {
    use super::*;

    /// Packs nothing; exercises the strategy seam.
    struct RejectAll;

    impl PackingStrategy for RejectAll {
        fn name(&self) -> &str {
            "reject-all"
        }

        fn pack(&self, container: &Container, items: &[Item]) -> stowage_packer::Result<Outcome> {
            Ok(Outcome::new(*container, Vec::new(), items.to_vec()))
        }
    }

    #[test]
    fn test_custom_strategy_is_used() {
        let container = Container::new(100.0, 100.0, 100.0, 1000.0).unwrap();
        let items = vec![Item::new("Box", 10.0, 10.0, 10.0, 1.0, Priority::Medium).unwrap()];

        let optimizer = ContainerOptimizer::with_strategy(RejectAll);
        assert_eq!(optimizer.strategy().name(), "reject-all");

        let outcome = optimizer.optimize(&container, &items).unwrap();
        assert_eq!(outcome.unpacked_count(), 1);
        assert!(!outcome.is_fully_packed());
    }

    #[test]
    fn test_custom_tolerance() {
        // 100.05 long in a 100 long container only fits with a looser tolerance.
        let container = Container::new(100.0, 10.0, 10.0, 1000.0).unwrap();
        let items = vec![Item::new("Beam", 100.05, 10.0, 10.0, 1.0, Priority::Medium)
            .unwrap()
            .with_rotation(false)];

        let strict = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();
        assert_eq!(strict.packed_count(), 0);

        let loose = ContainerOptimizer::with_strategy(FirstFitDecreasing::new(
            Config::default().with_tolerance(0.1),
        ))
        .optimize(&container, &items)
        .unwrap();
        assert_eq!(loose.packed_count(), 1);
    }
}

mod real_world_tests {
    use super::*;

    #[test]
    fn test_moving_truck() {
        let truck = Container::new(600.0, 240.0, 240.0, 5000.0).unwrap();
        let items = vec![
            Item::new("Desk", 150.0, 80.0, 75.0, 50.0, Priority::Heavy).unwrap(),
            Item::new("Chair", 60.0, 60.0, 90.0, 15.0, Priority::Medium).unwrap(),
            Item::new("TV Box", 120.0, 80.0, 20.0, 12.0, Priority::Fragile).unwrap(),
            Item::new("Books Box", 40.0, 30.0, 30.0, 20.0, Priority::Medium).unwrap(),
            Item::new("Lamp", 30.0, 30.0, 60.0, 3.0, Priority::Fragile).unwrap(),
            Item::new("Mattress", 200.0, 150.0, 30.0, 25.0, Priority::Medium).unwrap(),
            Item::new("Pillows", 60.0, 60.0, 40.0, 2.0, Priority::Light).unwrap(),
        ];

        let outcome = ContainerOptimizer::new().optimize(&truck, &items).unwrap();

        assert!(outcome.is_fully_packed());
        assert!(outcome.space_utilization() > 0.05);
        assert_eq!(outcome.packed()[0].item().label(), "Desk");
        assert_invariants(&outcome, &truck, &items);
    }

    #[test]
    fn test_grocery_delivery_protects_fragile() {
        let delivery_box = Container::new(60.0, 40.0, 40.0, 30.0).unwrap();
        let items = vec![
            Item::new("Water Bottles (6-pack)", 30.0, 20.0, 25.0, 6.0, Priority::Heavy).unwrap(),
            Item::new("Bread", 25.0, 15.0, 10.0, 0.5, Priority::Fragile).unwrap(),
            Item::new("Eggs", 20.0, 15.0, 8.0, 0.7, Priority::Fragile).unwrap(),
            Item::new("Canned Goods", 15.0, 15.0, 12.0, 3.0, Priority::Medium).unwrap(),
            Item::new("Chips", 30.0, 20.0, 25.0, 0.3, Priority::Light).unwrap(),
        ];

        let outcome = ContainerOptimizer::new()
            .optimize(&delivery_box, &items)
            .unwrap();

        let labels: Vec<&str> = outcome.packed().iter().map(|p| p.item().label()).collect();
        assert!(labels.contains(&"Bread"));
        assert!(labels.contains(&"Eggs"));

        for fragile in outcome
            .packed()
            .iter()
            .filter(|p| p.item().priority() == Priority::Fragile)
        {
            let above_heavy = outcome.packed().iter().any(|p| {
                p.item().priority() == Priority::Heavy && p.position().z > fragile.top() - 0.1
            });
            assert!(!above_heavy);
        }
        assert_invariants(&outcome, &delivery_box, &items);
    }

    #[test]
    fn test_warehouse_shipment() {
        let container = Container::new(120.0, 100.0, 100.0, 1000.0).unwrap();
        let tiers = [
            Priority::Fragile,
            Priority::Light,
            Priority::Medium,
            Priority::Heavy,
        ];
        let items: Vec<Item> = (1..=50)
            .map(|i| {
                Item::new(
                    format!("Package {}", i),
                    20.0 + (i % 10) as f64,
                    15.0 + (i % 8) as f64,
                    10.0 + (i % 5) as f64,
                    5.0 + (i % 3) as f64,
                    tiers[i % 4],
                )
                .unwrap()
            })
            .collect();

        let outcome = ContainerOptimizer::new()
            .optimize(&container, &items)
            .unwrap();

        assert!(outcome.packed_count() > 0);
        assert_invariants(&outcome, &container, &items);
    }
}

mod property_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TIERS: [Priority; 4] = [
        Priority::Fragile,
        Priority::Light,
        Priority::Medium,
        Priority::Heavy,
    ];

    fn random_items(seed: u64, count: usize) -> Vec<Item> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|i| {
                Item::new(
                    format!("item-{}", i),
                    rng.gen_range(5.0..45.0),
                    rng.gen_range(5.0..45.0),
                    rng.gen_range(5.0..45.0),
                    rng.gen_range(0.5..20.0),
                    TIERS[rng.gen_range(0..TIERS.len())],
                )
                .unwrap()
                .with_rotation(rng.gen_bool(0.7))
            })
            .collect()
    }

    #[test]
    fn test_invariants_hold_for_random_inputs() {
        let container = Container::new(100.0, 80.0, 60.0, 10_000.0).unwrap();
        let optimizer = ContainerOptimizer::new();

        for seed in 0..20 {
            let items = random_items(seed, 40);
            let outcome = optimizer.optimize(&container, &items).unwrap();
            assert_invariants(&outcome, &container, &items);
        }
    }

    #[test]
    fn test_invariants_hold_under_weight_pressure() {
        // Call the strategy directly so the running weight cutoff kicks in.
        let container = Container::new(100.0, 80.0, 60.0, 60.0).unwrap();
        let strategy = FirstFitDecreasing::default();

        for seed in 100..110 {
            let items = random_items(seed, 30);
            let outcome = strategy.pack(&container, &items).unwrap();
            assert_invariants(&outcome, &container, &items);
        }
    }

    #[test]
    fn test_deterministic_geometry() {
        let container = Container::new(100.0, 80.0, 60.0, 10_000.0).unwrap();
        let optimizer = ContainerOptimizer::new();

        let layout = |outcome: &Outcome| -> Vec<(String, Point, Rotation)> {
            outcome
                .packed()
                .iter()
                .map(|p| (p.item().label().to_string(), p.position(), p.rotation()))
                .collect()
        };

        // Fresh items (and ids) each time; geometry must not change.
        let first = optimizer
            .optimize(&container, &random_items(7, 40))
            .unwrap();
        let second = optimizer
            .optimize(&container, &random_items(7, 40))
            .unwrap();

        assert_eq!(layout(&first), layout(&second));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let container = Container::new(100.0, 80.0, 60.0, 10_000.0).unwrap();
        let optimizer = ContainerOptimizer::new();
        let jobs: Vec<(Container, Vec<Item>)> =
            (0..8).map(|seed| (container, random_items(seed, 25))).collect();

        let batch = optimizer.optimize_batch(&jobs);
        for ((c, items), result) in jobs.iter().zip(batch) {
            let parallel = result.unwrap();
            let sequential = optimizer.optimize(c, items).unwrap();
            let positions =
                |o: &Outcome| o.packed().iter().map(|p| p.position()).collect::<Vec<_>>();
            assert_eq!(positions(&parallel), positions(&sequential));
        }
    }
}
