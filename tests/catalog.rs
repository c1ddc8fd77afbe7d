//! Validates orientation transforms, family cycling, and catalog construction

// Test assertions unwrap freely
#![allow(clippy::unwrap_used)]

use mirrortile::catalog::{CatalogBuilder, OrientationTransform, ShapeSet, shapes};
use mirrortile::render::vector::VectorSink;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn blank(_: &mut dyn VectorSink, _: f64, _: f64, _: f64) {}

#[test]
fn test_every_flip_is_an_involution() {
    let catalog = shapes::standard().unwrap();
    for id in 0..catalog.shape_count() {
        for (fx, fy) in [(true, false), (false, true), (true, true)] {
            let once = catalog.transform(id, fx, fy);
            assert_eq!(
                catalog.transform(once, fx, fy),
                id,
                "flip ({fx}, {fy}) of shape {id} is not an involution"
            );
        }
    }
}

#[test]
fn test_asymmetric_transform_entries() {
    let catalog = shapes::standard().unwrap();
    assert_eq!(catalog.transform(4, true, false), 5);
    assert_eq!(catalog.transform(4, false, true), 6);
    assert_eq!(catalog.transform(4, true, true), 7);
    assert_eq!(catalog.transform(16, true, false), 17);
    assert_eq!(catalog.transform(16, true, true), 16);
    // Identity when no flip requested
    assert_eq!(catalog.transform(20, false, false), 20);
}

#[test]
fn test_combined_flip_agrees_with_sequential_flips() {
    let catalog = shapes::standard().unwrap();
    for id in 0..catalog.shape_count() {
        let sequential = catalog.transform(catalog.transform(id, true, false), false, true);
        assert_eq!(catalog.transform(id, true, true), sequential);
    }
}

#[test]
fn test_unknown_id_passes_through_transform() {
    let catalog = shapes::standard().unwrap();
    assert_eq!(catalog.transform(999, true, true), 999);
}

#[test]
fn test_family_cycles_wrap_around() {
    let catalog = shapes::standard().unwrap();
    assert_eq!(catalog.next_in_family(0), 1);
    assert_eq!(catalog.next_in_family(3), 0);
    assert_eq!(catalog.next_in_family(16), 17);
    assert_eq!(catalog.next_in_family(17), 16);
}

#[test]
fn test_shape_without_family_cycles_to_itself() {
    let mut builder = CatalogBuilder::new();
    let lone = builder.symmetric("lone", blank);
    let catalog = builder.build().unwrap();
    assert_eq!(catalog.next_in_family(lone), lone);
}

#[test]
fn test_build_rejects_out_of_range_transform() {
    let mut builder = CatalogBuilder::new();
    builder.oriented(
        "bad",
        blank,
        OrientationTransform {
            flip_x: 5,
            flip_y: 0,
            flip_both: 0,
        },
    );
    assert!(builder.build().is_err());
}

#[test]
fn test_build_rejects_non_involution() {
    let mut builder = CatalogBuilder::new();
    builder.oriented(
        "a",
        blank,
        OrientationTransform {
            flip_x: 1,
            flip_y: 0,
            flip_both: 0,
        },
    );
    builder.oriented(
        "b",
        blank,
        OrientationTransform {
            flip_x: 1,
            flip_y: 1,
            flip_both: 1,
        },
    );
    // flipping "a" horizontally gives "b", but flipping "b" gives "b"
    assert!(builder.build().is_err());
}

#[test]
fn test_build_rejects_overlapping_families() {
    let mut builder = CatalogBuilder::new();
    let a = builder.symmetric("a", blank);
    let b = builder.symmetric("b", blank);
    builder.family(&[a, b]);
    builder.family(&[b]);
    assert!(builder.build().is_err());
}

#[test]
fn test_build_rejects_family_with_unknown_member() {
    let mut builder = CatalogBuilder::new();
    builder.symmetric("a", blank);
    builder.family(&[0, 7]);
    assert!(builder.build().is_err());
}

#[test]
fn test_standard_catalog_family_coverage() {
    let catalog = shapes::standard().unwrap();
    assert_eq!(catalog.shape_count(), 28);
    for id in 0..catalog.shape_count() {
        let family = catalog.family_of(id).unwrap();
        assert!(catalog.family_members(family).contains(&id));
    }
}

#[test]
fn test_shape_set_operations() {
    let mut set = ShapeSet::new(10);
    assert!(set.is_empty());
    set.insert(2);
    set.insert(7);
    set.insert(7);
    assert_eq!(set.count(), 2);
    assert!(set.contains(2));
    assert!(!set.contains(3));
    set.remove(2);
    assert_eq!(set.to_vec(), vec![7]);
}

#[test]
fn test_shape_set_choose_respects_membership() {
    let set = ShapeSet::from_ids(&[3], 10);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        assert_eq!(set.choose(&mut rng), Some(3));
    }
    let empty = ShapeSet::new(10);
    assert_eq!(empty.choose(&mut rng), None);
}

#[test]
fn test_choose_or_any_falls_back_to_full_catalog() {
    let catalog = shapes::standard().unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let set = ShapeSet::from_ids(&[5], catalog.shape_count());
    assert_eq!(set.choose_or_any(&catalog, &mut rng), 5);

    let empty = ShapeSet::new(catalog.shape_count());
    for _ in 0..10 {
        assert!(catalog.contains(empty.choose_or_any(&catalog, &mut rng)));
    }
}
