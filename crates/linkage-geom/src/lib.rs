// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Collision and visual geometry bookkeeping for multibody systems.

This crate provides:
- A static geometry model (`GeometryCatalog`): which shapes exist, which joint
  each is attached to, and which pairs of shapes are candidates for proximity
  queries.
- Per-evaluation data (`GeometryRuntimeState`): world placements, a pair
  activation mask, per-pair result slots, and a joint-keyed geometry index
  used to visit only relevant joint buckets.
- Thin orchestration over an external narrow-phase engine
  (`ProximityEngine`): this crate decides which pairs reach the engine and
  stores its verdicts, it never computes intersections or distances itself.

Design notes:
- The catalog is append-only and shared read-only once built; a runtime state
  is a snapshot of it and must be rebuilt when the catalog changes.
- Invalid arguments are rejected before any mutation. Duplicate insertions,
  removals of absent pairs, and repeated activation toggles are silent no-ops.
- Name and pair lookups report absence through a count sentinel, not an error.
- Without the `proximity` feature only placements are tracked. The engine
  seam types stay available so engine implementations build either way.
"]

#[cfg(feature = "proximity")]
mod adjacency;
#[cfg(feature = "proximity")]
mod algorithms;
mod catalog;
mod error;
mod ident;
/// Read-only kinematic model seam.
pub mod kinematics;
mod object;
mod pair;
mod placement;
/// Narrow-phase engine seam, request configuration, and result types.
pub mod proximity;
mod shape;
mod state;

#[cfg(feature = "proximity")]
pub use adjacency::JointGeometryIndex;
#[cfg(feature = "proximity")]
pub use algorithms::{
    compute_body_radius, compute_collision, compute_collisions, compute_distance,
    compute_distances, compute_joint_collisions,
};
pub use catalog::GeometryCatalog;
pub use error::{GeometryError, GeometryResult};
pub use ident::{FrameIndex, GeomIndex, JointIndex, PairIndex};
pub use kinematics::FrameTree;
pub use object::{GeometryObject, DEFAULT_MESH_COLOR};
pub use pair::CollisionPair;
pub use placement::update_geometry_placements;
pub use proximity::{
    CollisionRequest, CollisionResult, Contact, DistanceRequest, DistanceResult, ProximityConfig,
    ProximityEngine,
};
pub use shape::{Shape, ShapeHandle};
pub use state::GeometryRuntimeState;
