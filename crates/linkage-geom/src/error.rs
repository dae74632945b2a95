// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for catalog and runtime-state operations.
use thiserror::Error;

use crate::ident::{FrameIndex, GeomIndex, JointIndex, PairIndex};

/// Invalid-argument conditions raised by catalog and runtime-state operations.
///
/// Every variant describes an argument outside the valid range of the
/// structure it was handed to. Operations check their arguments before
/// touching any state, so an `Err` always leaves the structure unmodified.
///
/// Idempotent operations (duplicate pair insertion, removing an absent pair,
/// re-activating an active pair) and name/pair lookups never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A geometry index is not smaller than the catalog's geometry count.
    #[error("geometry index {index} is out of range (catalog holds {ngeoms} geometries)")]
    GeometryIndexOutOfRange {
        /// Offending geometry index.
        index: GeomIndex,
        /// Geometry count at the time of the call.
        ngeoms: usize,
    },
    /// A collision-pair index is not smaller than the pair count.
    #[error("collision pair index {index} is out of range ({npairs} pairs)")]
    PairIndexOutOfRange {
        /// Offending pair index.
        index: PairIndex,
        /// Pair count at the time of the call.
        npairs: usize,
    },
    /// Both members of a collision pair name the same geometry.
    #[error("collision pair ({index},{index}) pairs a geometry with itself")]
    DegeneratePair {
        /// The repeated geometry index.
        index: GeomIndex,
    },
    /// A geometry's declared parent joint disagrees with its frame's joint.
    #[error(
        "geometry `{name}` declares parent joint {declared} but frame {frame} is attached to joint {actual}"
    )]
    JointFrameMismatch {
        /// Name of the rejected geometry object.
        name: String,
        /// Frame the object references.
        frame: FrameIndex,
        /// Joint declared on the object.
        declared: JointIndex,
        /// Joint the kinematic model attaches the frame to.
        actual: JointIndex,
    },
    /// A geometry is attached to a joint with no supplied placement.
    #[error("no placement supplied for joint {joint} ({njoints} joint placements given)")]
    JointIndexOutOfRange {
        /// Joint index without a placement.
        joint: JointIndex,
        /// Number of joint placements supplied.
        njoints: usize,
    },
    /// A runtime state was built from a catalog with different dimensions.
    #[error(
        "runtime state tracks {state_geoms} geometries and {state_pairs} pairs, catalog has {ngeoms} and {npairs}; rebuild the state"
    )]
    StaleRuntimeState {
        /// Geometry count the state was sized for.
        state_geoms: usize,
        /// Pair count the state was sized for.
        state_pairs: usize,
        /// Current catalog geometry count.
        ngeoms: usize,
        /// Current catalog pair count.
        npairs: usize,
    },
}

/// Convenience alias for results carrying a [`GeometryError`].
pub type GeometryResult<T> = Result<T, GeometryError>;
