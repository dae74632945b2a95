// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![cfg(feature = "serde")]
#![allow(missing_docs)]
//! Serde round-trips for request configuration and collision pairs.

use linkage_dry_tests::config_from_json;
use linkage_geom::{CollisionPair, ProximityConfig};

#[test]
fn empty_document_yields_defaults() {
    let config = config_from_json("{}").expect("empty object parses");
    assert_eq!(config, ProximityConfig::default());
    assert!(config.distance.enable_nearest_points);
    assert_eq!(config.collision.num_max_contacts, 1);
    assert!(!config.collision.enable_contact);
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let config = config_from_json(r#"{ "collision": { "num_max_contacts": 4, "enable_contact": true } }"#)
        .expect("partial config parses");
    assert_eq!(config.collision.num_max_contacts, 4);
    assert!(config.collision.enable_contact);
    assert!(config.collision.security_margin.abs() < f64::EPSILON);
    assert_eq!(config.distance, ProximityConfig::default().distance);
}

#[test]
fn malformed_document_is_an_error() {
    assert!(config_from_json(r#"{ "collision": { "num_max_contacts": -1 } }"#).is_err());
    assert!(config_from_json("[").is_err());
}

#[test]
fn collision_pair_serializes_as_tuple_and_rejects_degenerate() {
    let pair = CollisionPair::new(3, 1).expect("distinct members");
    let json = serde_json::to_string(&pair).expect("serialize pair");
    assert_eq!(json, "[3,1]");

    let back: CollisionPair = serde_json::from_str("[1,3]").expect("deserialize pair");
    assert_eq!(back, pair);
    assert!(serde_json::from_str::<CollisionPair>("[2,2]").is_err());
}
