// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-evaluation state derived from a [`GeometryCatalog`] snapshot.
//!
//! A runtime state owns everything mutated during an evaluation cycle: world
//! placements, the pair activation mask, result slots, and the joint-keyed
//! geometry index. It keeps no reference to the catalog, so one catalog can
//! back many states (one per worker thread, for example). When the catalog
//! changes, build a new state instead of patching the old one.
use core::fmt;

use nalgebra::Isometry3;
use tracing::{debug, warn};

use crate::catalog::GeometryCatalog;
use crate::error::{GeometryError, GeometryResult};
use crate::ident::GeomIndex;
#[cfg(feature = "proximity")]
use crate::{
    adjacency::JointGeometryIndex,
    ident::{JointIndex, PairIndex},
    proximity::{CollisionResult, DistanceResult, ProximityConfig},
};

/// Mutable evaluation data for one catalog snapshot.
///
/// Not internally synchronized; mutate from one thread at a time.
#[derive(Debug, Clone)]
pub struct GeometryRuntimeState {
    placements: Vec<Isometry3<f64>>,
    npairs: usize,
    #[cfg(feature = "proximity")]
    active: Vec<bool>,
    #[cfg(feature = "proximity")]
    distance_results: Vec<DistanceResult>,
    #[cfg(feature = "proximity")]
    collision_results: Vec<CollisionResult>,
    #[cfg(feature = "proximity")]
    collision_pair_index: PairIndex,
    #[cfg(feature = "proximity")]
    radius: Vec<f64>,
    #[cfg(feature = "proximity")]
    config: ProximityConfig,
    #[cfg(feature = "proximity")]
    index: JointGeometryIndex,
}

impl GeometryRuntimeState {
    /// Builds a state sized for `catalog`, with every pair active and
    /// identity placements.
    #[must_use]
    pub fn new(catalog: &GeometryCatalog) -> Self {
        let state = Self {
            placements: vec![Isometry3::identity(); catalog.ngeoms()],
            npairs: catalog.npairs(),
            #[cfg(feature = "proximity")]
            active: vec![true; catalog.npairs()],
            #[cfg(feature = "proximity")]
            distance_results: vec![DistanceResult::default(); catalog.npairs()],
            #[cfg(feature = "proximity")]
            collision_results: vec![CollisionResult::default(); catalog.npairs()],
            #[cfg(feature = "proximity")]
            collision_pair_index: catalog.npairs(),
            #[cfg(feature = "proximity")]
            radius: Vec::new(),
            #[cfg(feature = "proximity")]
            config: ProximityConfig::default(),
            #[cfg(feature = "proximity")]
            index: JointGeometryIndex::build(catalog),
        };
        debug!(ngeoms = catalog.ngeoms(), npairs = catalog.npairs(), "runtime state built");
        state
    }

    /// Number of geometries this state was sized for.
    #[must_use]
    pub fn ngeoms(&self) -> usize {
        self.placements.len()
    }

    /// Number of collision pairs this state was sized for.
    #[must_use]
    pub fn npairs(&self) -> usize {
        self.npairs
    }

    /// World placement of every geometry, by geometry index.
    pub fn placements(&self) -> &[Isometry3<f64>] {
        &self.placements
    }

    /// World placement of geometry `index`, if any.
    pub fn placement(&self, index: GeomIndex) -> Option<&Isometry3<f64>> {
        self.placements.get(index)
    }

    /// Overwrites the world placement of geometry `index`.
    pub fn set_placement(&mut self, index: GeomIndex, placement: Isometry3<f64>) -> GeometryResult<()> {
        let ngeoms = self.placements.len();
        match self.placements.get_mut(index) {
            Some(slot) => {
                *slot = placement;
                Ok(())
            }
            None => {
                warn!(index, ngeoms, "placement index out of range");
                Err(GeometryError::GeometryIndexOutOfRange { index, ngeoms })
            }
        }
    }

    pub(crate) fn placements_mut(&mut self) -> &mut [Isometry3<f64>] {
        &mut self.placements
    }

    /// Rejects a catalog whose dimensions differ from this state's snapshot.
    ///
    /// Only sizes are compared; a catalog edited in place without changing
    /// its counts is not detected.
    pub fn ensure_matches(&self, catalog: &GeometryCatalog) -> GeometryResult<()> {
        let state_pairs = self.npairs;
        if self.placements.len() == catalog.ngeoms() && state_pairs == catalog.npairs() {
            return Ok(());
        }
        warn!(
            state_geoms = self.placements.len(),
            state_pairs,
            ngeoms = catalog.ngeoms(),
            npairs = catalog.npairs(),
            "stale runtime state"
        );
        Err(GeometryError::StaleRuntimeState {
            state_geoms: self.placements.len(),
            state_pairs,
            ngeoms: catalog.ngeoms(),
            npairs: catalog.npairs(),
        })
    }
}

#[cfg(feature = "proximity")]
impl GeometryRuntimeState {
    /// Builds a state for `catalog` using `config` for proximity requests.
    #[must_use]
    pub fn with_config(catalog: &GeometryCatalog, config: ProximityConfig) -> Self {
        let mut state = Self::new(catalog);
        state.config = config;
        state
    }

    /// Recomputes the joint-keyed geometry index from `catalog`.
    ///
    /// Only the index is refreshed; buffers keep their sizes. After adding
    /// geometries or pairs, build a fresh state with [`Self::new`].
    pub fn rebuild_adjacency_index(&mut self, catalog: &GeometryCatalog) {
        self.index.rebuild(catalog);
        debug!(joints = self.index.inner_map().len(), "adjacency index rebuilt");
    }

    /// Joint-keyed geometry index.
    pub fn adjacency(&self) -> &JointGeometryIndex {
        &self.index
    }

    /// Geometries attached to `joint`.
    pub fn inner_geometries(&self, joint: JointIndex) -> &[GeomIndex] {
        self.index.inner(joint)
    }

    /// Declared partners of the geometries attached to `joint`.
    pub fn outer_geometries(&self, joint: JointIndex) -> &[GeomIndex] {
        self.index.outer(joint)
    }

    fn check_pair_index(&self, index: PairIndex) -> GeometryResult<()> {
        let npairs = self.active.len();
        if index < npairs {
            Ok(())
        } else {
            warn!(index, npairs, "pair index out of range");
            Err(GeometryError::PairIndexOutOfRange { index, npairs })
        }
    }

    /// Marks pair `index` active. Cached results are left as they are.
    pub fn activate_collision_pair(&mut self, index: PairIndex) -> GeometryResult<()> {
        self.check_pair_index(index)?;
        self.active[index] = true;
        Ok(())
    }

    /// Marks pair `index` inactive. Cached results are left as they are.
    pub fn deactivate_collision_pair(&mut self, index: PairIndex) -> GeometryResult<()> {
        self.check_pair_index(index)?;
        self.active[index] = false;
        Ok(())
    }

    /// Sets every activation bit to `active`.
    pub fn set_all_collision_pairs_active(&mut self, active: bool) {
        self.active.fill(active);
    }

    /// Activation bit of pair `index`, if any.
    pub fn is_collision_pair_active(&self, index: PairIndex) -> Option<bool> {
        self.active.get(index).copied()
    }

    /// Activation mask, by pair index.
    pub fn active_mask(&self) -> &[bool] {
        &self.active
    }

    /// Indices of active pairs, ascending.
    pub fn active_pairs(&self) -> impl Iterator<Item = PairIndex> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    /// Cached distance results, by pair index.
    pub fn distance_results(&self) -> &[DistanceResult] {
        &self.distance_results
    }

    /// Cached distance result of pair `index`, if any.
    pub fn distance_result(&self, index: PairIndex) -> Option<&DistanceResult> {
        self.distance_results.get(index)
    }

    /// Cached collision results, by pair index.
    pub fn collision_results(&self) -> &[CollisionResult] {
        &self.collision_results
    }

    /// Cached collision result of pair `index`, if any.
    pub fn collision_result(&self, index: PairIndex) -> Option<&CollisionResult> {
        self.collision_results.get(index)
    }

    /// First pair found colliding by the last batch collision query.
    ///
    /// Equals [`Self::npairs`] when none collided (or none was evaluated).
    #[must_use]
    pub fn collision_pair_index(&self) -> PairIndex {
        self.collision_pair_index
    }

    /// Per-joint bounding radius filled by [`crate::compute_body_radius`].
    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    /// Proximity request configuration.
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Mutable proximity request configuration.
    pub fn config_mut(&mut self) -> &mut ProximityConfig {
        &mut self.config
    }

    pub(crate) fn store_distance(&mut self, index: PairIndex, result: DistanceResult) {
        self.distance_results[index] = result;
    }

    pub(crate) fn store_collision(&mut self, index: PairIndex, result: CollisionResult) {
        self.collision_results[index] = result;
    }

    pub(crate) fn set_collision_pair_index(&mut self, index: PairIndex) {
        self.collision_pair_index = index;
    }

    pub(crate) fn set_radius(&mut self, radius: Vec<f64>) {
        self.radius = radius;
    }
}

#[cfg(feature = "proximity")]
impl fmt::Display for GeometryRuntimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of collision pairs = {}", self.active.len())?;
        for (i, &on) in self.active.iter().enumerate() {
            writeln!(f, "Pairs {i} {}", if on { "active" } else { "inactive" })?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "proximity"))]
impl fmt::Display for GeometryRuntimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "WARNING: built without the `proximity` feature; collision and distance queries are unsupported, only geometry placements are tracked."
        )?;
        writeln!(f, "Number of geometry objects = {}", self.placements.len())
    }
}
