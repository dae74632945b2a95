// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![cfg(feature = "proximity")]
#![allow(missing_docs)]
//! Integration tests for runtime-state lifecycle, activation toggling, and the
//! joint-keyed geometry index.

use linkage_dry_tests::{three_geometry_catalog, CatalogBuilder, Sphere};
use linkage_geom::{
    CollisionPair, GeometryError, GeometryObject, GeometryRuntimeState, ProximityConfig,
};
use nalgebra::Isometry3;

#[test]
fn new_state_matches_catalog_dimensions_with_all_pairs_active() {
    let catalog = three_geometry_catalog();
    let state = GeometryRuntimeState::new(&catalog);
    assert_eq!(state.ngeoms(), 3);
    assert_eq!(state.npairs(), 2);
    assert_eq!(state.active_mask(), &[true, true]);
    assert_eq!(state.distance_results().len(), 2);
    assert_eq!(state.collision_results().len(), 2);
    assert_eq!(state.collision_pair_index(), 2);
    assert!(state.placements().iter().all(|p| *p == Isometry3::identity()));
    assert_eq!(state.config(), &ProximityConfig::default());
}

#[test]
fn deactivating_first_pair_flips_only_that_bit() {
    let catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);
    state.deactivate_collision_pair(0).expect("pair 0 exists");
    assert_eq!(state.active_mask(), &[false, true]);
    assert_eq!(state.active_pairs().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn activation_toggles_are_idempotent() {
    let catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);

    state.activate_collision_pair(1).expect("pair 1 exists");
    state.activate_collision_pair(1).expect("re-activation is a no-op");
    assert_eq!(state.is_collision_pair_active(1), Some(true));

    state.deactivate_collision_pair(1).expect("pair 1 exists");
    state.deactivate_collision_pair(1).expect("re-deactivation is a no-op");
    assert_eq!(state.is_collision_pair_active(1), Some(false));
    assert_eq!(state.is_collision_pair_active(5), None);

    state.set_all_collision_pairs_active(false);
    assert_eq!(state.active_mask(), &[false, false]);
    state.set_all_collision_pairs_active(true);
    assert_eq!(state.active_mask(), &[true, true]);
}

#[test]
fn out_of_range_toggle_is_rejected_and_mask_untouched() {
    let catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);
    let err = state.deactivate_collision_pair(2).expect_err("only two pairs");
    assert_eq!(err, GeometryError::PairIndexOutOfRange { index: 2, npairs: 2 });
    let err = state.activate_collision_pair(40).expect_err("only two pairs");
    assert!(matches!(err, GeometryError::PairIndexOutOfRange { index: 40, .. }));
    assert_eq!(state.active_mask(), &[true, true]);
}

#[test]
fn adjacency_index_lists_inner_and_outer_geometries() {
    let catalog = three_geometry_catalog();
    let state = GeometryRuntimeState::new(&catalog);
    assert_eq!(state.inner_geometries(0), &[0, 1]);
    assert_eq!(state.inner_geometries(1), &[2]);
    // Both pairs have their first member on joint 0.
    assert_eq!(state.outer_geometries(0), &[2, 2]);
    assert!(state.outer_geometries(1).is_empty());
    assert_eq!(state.adjacency().joints().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn adjacency_index_is_a_snapshot_until_rebuilt() {
    let mut catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);

    catalog
        .remove_collision_pair(&CollisionPair::new(1, 2).expect("distinct"))
        .expect("in range");
    assert_eq!(state.outer_geometries(0), &[2, 2]);

    state.rebuild_adjacency_index(&catalog);
    assert_eq!(state.outer_geometries(0), &[2]);
}

#[test]
fn stale_state_is_detected_by_dimension() {
    let mut catalog = three_geometry_catalog();
    let state = GeometryRuntimeState::new(&catalog);
    state.ensure_matches(&catalog).expect("fresh state matches");

    catalog.add_geometry_object(GeometryObject::new("extra", 2, 0, Box::new(Sphere::new(1.0))));
    let err = state.ensure_matches(&catalog).expect_err("catalog grew");
    assert_eq!(
        err,
        GeometryError::StaleRuntimeState {
            state_geoms: 3,
            state_pairs: 2,
            ngeoms: 4,
            npairs: 2,
        }
    );

    let rebuilt = GeometryRuntimeState::new(&catalog);
    rebuilt.ensure_matches(&catalog).expect("rebuilt state matches");
}

#[test]
fn set_placement_checks_geometry_range() {
    let catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);
    let pose = Isometry3::translation(1.0, 2.0, 3.0);
    state.set_placement(2, pose).expect("geometry 2 exists");
    assert_eq!(state.placement(2), Some(&pose));
    let err = state.set_placement(3, pose).expect_err("only three geometries");
    assert_eq!(err, GeometryError::GeometryIndexOutOfRange { index: 3, ngeoms: 3 });
}

#[test]
fn with_config_stores_request_configuration() {
    let catalog = three_geometry_catalog();
    let mut config = ProximityConfig::default();
    config.collision.security_margin = 0.25;
    let mut state = GeometryRuntimeState::with_config(&catalog, config);
    assert_eq!(state.config().collision.security_margin, 0.25);
    state.config_mut().distance.enable_nearest_points = false;
    assert!(!state.config().distance.enable_nearest_points);
}

#[test]
fn display_labels_each_pair() {
    let catalog = three_geometry_catalog();
    let mut state = GeometryRuntimeState::new(&catalog);
    state.deactivate_collision_pair(0).expect("pair 0 exists");
    assert_eq!(
        state.to_string(),
        "Number of collision pairs = 2\nPairs 0 inactive\nPairs 1 active\n"
    );
}

#[test]
fn empty_catalog_yields_empty_state() {
    let catalog = CatalogBuilder::new().build();
    let state = GeometryRuntimeState::new(&catalog);
    assert_eq!(state.ngeoms(), 0);
    assert_eq!(state.npairs(), 0);
    assert!(state.adjacency().is_empty());
    assert_eq!(state.to_string(), "Number of collision pairs = 0\n");
}
