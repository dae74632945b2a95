// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Index aliases shared by the catalog, runtime state, and kinematic seam.
//!
//! Indices are positional: a geometry's index is its slot in the catalog and
//! never changes once assigned. Lookups that miss return the relevant count
//! as a sentinel instead of a dedicated "not found" value, so callers compare
//! against `ngeoms()` / `npairs()` rather than testing for a magic number.

/// Position of a geometry object inside a [`crate::GeometryCatalog`].
pub type GeomIndex = usize;

/// Index of a joint in the external kinematic model.
pub type JointIndex = usize;

/// Index of a frame in the external kinematic model.
pub type FrameIndex = usize;

/// Position of a collision pair inside a [`crate::GeometryCatalog`].
pub type PairIndex = usize;
