// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Proximity config fixtures.

use linkage_geom::{CollisionRequest, DistanceRequest, ProximityConfig};

/// Parse a [`ProximityConfig`] from a JSON document.
///
/// Missing fields take their defaults, so `"{}"` yields
/// `ProximityConfig::default()`.
pub fn config_from_json(json: &str) -> Result<ProximityConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Config asking for up to `max_contacts` contact points per colliding pair.
pub fn contact_config(max_contacts: usize) -> ProximityConfig {
    ProximityConfig {
        distance: DistanceRequest::default(),
        collision: CollisionRequest {
            num_max_contacts: max_contacts,
            enable_contact: true,
            ..CollisionRequest::default()
        },
    }
}
