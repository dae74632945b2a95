// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seam to the narrow-phase proximity engine: request configuration, result
//! slots, and the engine trait itself.
//!
//! The runtime state owns one [`ProximityConfig`] and one result slot of each
//! kind per collision pair. The engine only ever sees two shapes and their
//! world placements; it never learns about pairs, joints, or the catalog.
use nalgebra::{Isometry3, Point3, Vector3};

use crate::shape::Shape;

/// Parameters for distance queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceRequest {
    /// Ask the engine for the witness points realizing the distance.
    pub enable_nearest_points: bool,
}

impl Default for DistanceRequest {
    fn default() -> Self {
        Self {
            enable_nearest_points: true,
        }
    }
}

/// Parameters for collision (overlap) queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollisionRequest {
    /// Upper bound on stored contacts per pair.
    pub num_max_contacts: usize,
    /// Ask the engine for contact points, not just a boolean verdict.
    pub enable_contact: bool,
    /// Shapes closer than this margin are reported as colliding.
    pub security_margin: f64,
}

impl Default for CollisionRequest {
    fn default() -> Self {
        Self {
            num_max_contacts: 1,
            enable_contact: false,
            security_margin: 0.0,
        }
    }
}

/// Request configuration owned by a runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProximityConfig {
    /// Used by distance queries.
    pub distance: DistanceRequest,
    /// Used by collision queries.
    pub collision: CollisionRequest,
}

/// Outcome of a distance query.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    /// Signed separation between the shapes; `f64::MAX` until computed.
    pub min_distance: f64,
    /// Witness points on each shape, in world coordinates, when requested.
    pub nearest_points: Option<[Point3<f64>; 2]>,
}

impl DistanceResult {
    /// Result for a pair at distance `min_distance` without witness points.
    #[must_use]
    pub const fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            nearest_points: None,
        }
    }
}

impl Default for DistanceResult {
    fn default() -> Self {
        Self::new(f64::MAX)
    }
}

/// A single contact reported by a collision query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world coordinates.
    pub position: Point3<f64>,
    /// Unit normal pointing from the first shape to the second.
    pub normal: Vector3<f64>,
    /// Overlap depth along `normal`.
    pub penetration_depth: f64,
}

/// Outcome of a collision query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionResult {
    /// Whether the shapes overlap (within the security margin).
    pub in_collision: bool,
    /// Contacts, at most `num_max_contacts`; empty unless contacts were requested.
    pub contacts: Vec<Contact>,
}

impl CollisionResult {
    /// Returns the boolean verdict.
    #[must_use]
    pub const fn is_collision(&self) -> bool {
        self.in_collision
    }
}

/// Narrow-phase proximity engine.
///
/// Implementations downcast the shapes through [`Shape::as_any`]. Calls are
/// synchronous; their cost is entirely the engine's.
pub trait ProximityEngine {
    /// Boolean overlap test, optionally with contacts.
    fn collide(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &CollisionRequest,
    ) -> CollisionResult;

    /// Separation distance, optionally with witness points.
    fn distance(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &DistanceRequest,
    ) -> DistanceResult;

    /// Radius of a sphere centered on the shape origin enclosing the shape.
    fn bounding_radius(&self, shape: &dyn Shape) -> f64;
}

impl<E: ProximityEngine + ?Sized> ProximityEngine for &E {
    fn collide(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &CollisionRequest,
    ) -> CollisionResult {
        (**self).collide(a, pose_a, b, pose_b, request)
    }

    fn distance(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &DistanceRequest,
    ) -> DistanceResult {
        (**self).distance(a, pose_a, b, pose_b, request)
    }

    fn bounding_radius(&self, shape: &dyn Shape) -> f64 {
        (**self).bounding_radius(shape)
    }
}
