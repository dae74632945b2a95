// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sphere-only proximity engine fake.

use std::sync::atomic::{AtomicUsize, Ordering};

use linkage_geom::{
    CollisionRequest, CollisionResult, Contact, DistanceRequest, DistanceResult, ProximityEngine,
    Shape,
};
use nalgebra::{Isometry3, Point3, Vector3};

use crate::shapes::Sphere;

/// Proximity engine fake for [`Sphere`] and [`crate::Point`] shapes.
///
/// Distances are computed between sphere centers (the translation of each
/// pose) minus both radii. Unknown shapes are treated as points. Query calls
/// are counted so tests can check which pairs reached the engine.
///
/// # Example
///
/// ```
/// use linkage_dry_tests::{Sphere, SphereEngine};
/// use linkage_geom::{CollisionRequest, ProximityEngine};
/// use nalgebra::Isometry3;
///
/// let engine = SphereEngine::new();
/// let ball = Sphere::new(1.0);
/// let result = engine.collide(
///     &ball,
///     &Isometry3::identity(),
///     &ball,
///     &Isometry3::translation(1.5, 0.0, 0.0),
///     &CollisionRequest::default(),
/// );
/// assert!(result.is_collision());
/// assert_eq!(engine.collide_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SphereEngine {
    collide_calls: AtomicUsize,
    distance_calls: AtomicUsize,
}

impl SphereEngine {
    /// Create an engine with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `collide` calls so far.
    pub fn collide_calls(&self) -> usize {
        self.collide_calls.load(Ordering::Relaxed)
    }

    /// Number of `distance` calls so far.
    pub fn distance_calls(&self) -> usize {
        self.distance_calls.load(Ordering::Relaxed)
    }

    /// Reset both counters.
    pub fn reset_counts(&self) {
        self.collide_calls.store(0, Ordering::Relaxed);
        self.distance_calls.store(0, Ordering::Relaxed);
    }

    fn radius_of(shape: &dyn Shape) -> f64 {
        shape
            .as_any()
            .downcast_ref::<Sphere>()
            .map_or(0.0, |sphere| sphere.radius)
    }

    /// Signed separation, witness points, and unit normal from `a` to `b`.
    fn separation(
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
    ) -> (f64, [Point3<f64>; 2], Vector3<f64>) {
        let (ra, rb) = (Self::radius_of(a), Self::radius_of(b));
        let ca = Point3::from(pose_a.translation.vector);
        let cb = Point3::from(pose_b.translation.vector);
        let delta = cb - ca;
        let gap = delta.norm();
        let normal = if gap > 0.0 { delta / gap } else { Vector3::x() };
        let witnesses = [ca + normal * ra, cb - normal * rb];
        (gap - ra - rb, witnesses, normal)
    }
}

impl ProximityEngine for SphereEngine {
    fn collide(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &CollisionRequest,
    ) -> CollisionResult {
        self.collide_calls.fetch_add(1, Ordering::Relaxed);
        let (distance, [wa, wb], normal) = Self::separation(a, pose_a, b, pose_b);
        let in_collision = distance <= request.security_margin;
        let contacts = if in_collision && request.enable_contact {
            vec![Contact {
                position: Point3::from((wa.coords + wb.coords) * 0.5),
                normal,
                penetration_depth: -distance,
            }]
        } else {
            Vec::new()
        };
        CollisionResult {
            in_collision,
            contacts,
        }
    }

    fn distance(
        &self,
        a: &dyn Shape,
        pose_a: &Isometry3<f64>,
        b: &dyn Shape,
        pose_b: &Isometry3<f64>,
        request: &DistanceRequest,
    ) -> DistanceResult {
        self.distance_calls.fetch_add(1, Ordering::Relaxed);
        let (distance, witnesses, _) = Self::separation(a, pose_a, b, pose_b);
        DistanceResult {
            min_distance: distance,
            nearest_points: request.enable_nearest_points.then_some(witnesses),
        }
    }

    fn bounding_radius(&self, shape: &dyn Shape) -> f64 {
        Self::radius_of(shape)
    }
}
