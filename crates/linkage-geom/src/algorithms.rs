// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pair evaluation: decides which pairs reach the proximity engine and stores
//! its verdicts in the runtime state.
//!
//! Every entry point first checks that the state was built from a catalog of
//! the same dimensions ([`GeometryRuntimeState::ensure_matches`]).
use std::collections::BTreeSet;

use tracing::{instrument, trace, warn};

use crate::catalog::GeometryCatalog;
use crate::error::{GeometryError, GeometryResult};
use crate::ident::{JointIndex, PairIndex};
use crate::pair::CollisionPair;
use crate::proximity::{CollisionResult, DistanceResult, ProximityEngine};
use crate::state::GeometryRuntimeState;

fn check_pair_index(catalog: &GeometryCatalog, index: PairIndex) -> GeometryResult<&CollisionPair> {
    catalog.collision_pairs().get(index).ok_or_else(|| {
        warn!(index, npairs = catalog.npairs(), "pair index out of range");
        GeometryError::PairIndexOutOfRange {
            index,
            npairs: catalog.npairs(),
        }
    })
}

fn evaluate_collision<E>(
    catalog: &GeometryCatalog,
    state: &GeometryRuntimeState,
    engine: &E,
    pair: &CollisionPair,
) -> CollisionResult
where
    E: ProximityEngine + ?Sized,
{
    let objects = catalog.geometry_objects();
    let placements = state.placements();
    let (a, b) = (pair.first(), pair.second());
    let request = &state.config().collision;
    let mut result = engine.collide(
        objects[a].shape(),
        &placements[a],
        objects[b].shape(),
        &placements[b],
        request,
    );
    result.contacts.truncate(request.num_max_contacts);
    result
}

fn evaluate_distance<E>(
    catalog: &GeometryCatalog,
    state: &GeometryRuntimeState,
    engine: &E,
    pair: &CollisionPair,
) -> DistanceResult
where
    E: ProximityEngine + ?Sized,
{
    let objects = catalog.geometry_objects();
    let placements = state.placements();
    let (a, b) = (pair.first(), pair.second());
    engine.distance(
        objects[a].shape(),
        &placements[a],
        objects[b].shape(),
        &placements[b],
        &state.config().distance,
    )
}

/// Runs the collision query for pair `index`, active or not, and stores the
/// result. Returns the boolean verdict.
pub fn compute_collision<E>(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    engine: &E,
    index: PairIndex,
) -> GeometryResult<bool>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let pair = check_pair_index(catalog, index)?;
    let result = evaluate_collision(catalog, state, engine, pair);
    let hit = result.is_collision();
    trace!(index, %pair, hit, "collision query");
    state.store_collision(index, result);
    Ok(hit)
}

/// Runs the collision query on every active pair, in pair order.
///
/// Records the first colliding pair in
/// [`GeometryRuntimeState::collision_pair_index`] (the pair count when none
/// collides). With `stop_at_first`, evaluation ends at that pair and later
/// result slots keep their previous contents.
#[instrument(skip_all, fields(npairs = catalog.npairs(), stop_at_first = stop_at_first))]
pub fn compute_collisions<E>(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    engine: &E,
    stop_at_first: bool,
) -> GeometryResult<bool>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let npairs = catalog.npairs();
    let mut first_hit = npairs;
    for (index, pair) in catalog.collision_pairs().iter().enumerate() {
        if !state.active_mask()[index] {
            continue;
        }
        let result = evaluate_collision(catalog, state, engine, pair);
        let hit = result.is_collision();
        trace!(index, %pair, hit, "collision query");
        state.store_collision(index, result);
        if hit && first_hit == npairs {
            first_hit = index;
            if stop_at_first {
                break;
            }
        }
    }
    state.set_collision_pair_index(first_hit);
    Ok(first_hit < npairs)
}

/// Runs the distance query for pair `index`, active or not, and stores the
/// result.
pub fn compute_distance<'s, E>(
    catalog: &GeometryCatalog,
    state: &'s mut GeometryRuntimeState,
    engine: &E,
    index: PairIndex,
) -> GeometryResult<&'s DistanceResult>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let pair = check_pair_index(catalog, index)?;
    let result = evaluate_distance(catalog, state, engine, pair);
    trace!(index, %pair, distance = result.min_distance, "distance query");
    state.store_distance(index, result);
    Ok(&state.distance_results()[index])
}

/// Runs the distance query on every active pair and returns the index of the
/// closest one.
///
/// Returns the pair count when no pair is active. Ties keep the lowest index.
#[instrument(skip_all, fields(npairs = catalog.npairs()))]
pub fn compute_distances<E>(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    engine: &E,
) -> GeometryResult<PairIndex>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let mut closest = catalog.npairs();
    let mut min_distance = f64::INFINITY;
    for (index, pair) in catalog.collision_pairs().iter().enumerate() {
        if !state.active_mask()[index] {
            continue;
        }
        let result = evaluate_distance(catalog, state, engine, pair);
        trace!(index, %pair, distance = result.min_distance, "distance query");
        if result.min_distance < min_distance {
            min_distance = result.min_distance;
            closest = index;
        }
        state.store_distance(index, result);
    }
    Ok(closest)
}

/// Runs the collision query on the active pairs keyed by `joint` in the
/// state's adjacency index, i.e. the declared pairs whose first member is
/// attached to `joint`.
///
/// Only that joint's bucket is visited. Returns `true` if any evaluated pair
/// collides. [`GeometryRuntimeState::collision_pair_index`] is left alone.
#[instrument(skip_all, fields(joint = joint))]
pub fn compute_joint_collisions<E>(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    engine: &E,
    joint: JointIndex,
) -> GeometryResult<bool>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let pairs = catalog.collision_pairs();
    let selected: BTreeSet<PairIndex> = state
        .adjacency()
        .candidate_pairs(joint)
        .filter_map(|(g, h)| {
            let candidate = CollisionPair::new(g, h).ok()?;
            let index = catalog.find_collision_pair(&candidate);
            pairs
                .get(index)
                .filter(|stored| stored.first() == g)
                .map(|_| index)
        })
        .filter(|&index| state.active_mask()[index])
        .collect();

    let mut any_hit = false;
    for index in selected {
        let pair = &pairs[index];
        let result = evaluate_collision(catalog, state, engine, pair);
        let hit = result.is_collision();
        trace!(index, %pair, hit, "collision query");
        state.store_collision(index, result);
        any_hit |= hit;
    }
    Ok(any_hit)
}

/// Fills [`GeometryRuntimeState::radius`] with one bounding radius per joint.
///
/// A joint's radius is the largest `|placement.translation| + r` over its
/// geometries, `r` being the engine's bounding radius of the shape; joints
/// without geometry get `0`.
#[instrument(skip_all, fields(ngeoms = catalog.ngeoms(), njoints = njoints))]
pub fn compute_body_radius<E>(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    engine: &E,
    njoints: usize,
) -> GeometryResult<()>
where
    E: ProximityEngine + ?Sized,
{
    state.ensure_matches(catalog)?;
    let mut radius = vec![0.0_f64; njoints];
    for object in catalog.geometry_objects() {
        let Some(slot) = radius.get_mut(object.parent_joint) else {
            warn!(name = %object.name, joint = object.parent_joint, njoints, "geometry joint out of range");
            return Err(GeometryError::JointIndexOutOfRange {
                joint: object.parent_joint,
                njoints,
            });
        };
        let reach = object.placement.translation.vector.norm() + engine.bounding_radius(object.shape());
        *slot = slot.max(reach);
    }
    state.set_radius(radius);
    Ok(())
}
