// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! World placement update from joint placements.
use nalgebra::Isometry3;
use tracing::{instrument, warn};

use crate::catalog::GeometryCatalog;
use crate::error::{GeometryError, GeometryResult};
use crate::state::GeometryRuntimeState;

/// Sets `placements[g] = joint_placements[joint(g)] * object(g).placement`
/// for every geometry `g`.
///
/// `joint_placements` holds the world placement of each joint, by joint index,
/// as computed by the kinematic model's forward pass. Every geometry's joint
/// is checked before anything is written.
#[instrument(skip_all, fields(ngeoms = catalog.ngeoms(), njoints = joint_placements.len()))]
pub fn update_geometry_placements(
    catalog: &GeometryCatalog,
    state: &mut GeometryRuntimeState,
    joint_placements: &[Isometry3<f64>],
) -> GeometryResult<()> {
    state.ensure_matches(catalog)?;
    let njoints = joint_placements.len();
    if let Some(object) = catalog
        .geometry_objects()
        .iter()
        .find(|o| o.parent_joint >= njoints)
    {
        warn!(name = %object.name, joint = object.parent_joint, njoints, "missing joint placement");
        return Err(GeometryError::JointIndexOutOfRange {
            joint: object.parent_joint,
            njoints,
        });
    }

    for (slot, object) in state
        .placements_mut()
        .iter_mut()
        .zip(catalog.geometry_objects())
    {
        *slot = joint_placements[object.parent_joint] * object.placement;
    }
    Ok(())
}
