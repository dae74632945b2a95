// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static geometry description: the ordered geometry objects and the ordered
//! set of candidate collision pairs.
use core::fmt;

use tracing::{debug, warn};

use crate::error::{GeometryError, GeometryResult};
use crate::ident::{GeomIndex, JointIndex, PairIndex};
use crate::kinematics::FrameTree;
use crate::object::GeometryObject;
use crate::pair::CollisionPair;

/// Geometry model of a multibody system.
///
/// Objects are append-only: the index returned on insertion is the object's
/// identity for the catalog's lifetime. Pair order is evaluation order and
/// no pair (in either member order) appears twice.
///
/// A finished catalog is meant to be shared read-only (it is `Send + Sync`)
/// by any number of [`crate::GeometryRuntimeState`] instances. Mutating it
/// afterwards invalidates every state built from it.
#[derive(Debug, Default)]
pub struct GeometryCatalog {
    objects: Vec<GeometryObject>,
    pairs: Vec<CollisionPair>,
}

impl GeometryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of geometry objects.
    #[must_use]
    pub fn ngeoms(&self) -> usize {
        self.objects.len()
    }

    /// Number of collision pairs.
    #[must_use]
    pub fn npairs(&self) -> usize {
        self.pairs.len()
    }

    /// All geometry objects in index order.
    pub fn geometry_objects(&self) -> &[GeometryObject] {
        &self.objects
    }

    /// Geometry object at `index`, if any.
    pub fn geometry_object(&self, index: GeomIndex) -> Option<&GeometryObject> {
        self.objects.get(index)
    }

    /// All collision pairs in evaluation order.
    pub fn collision_pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }

    /// Parent joint of geometry `index`, if any.
    pub fn parent_joint(&self, index: GeomIndex) -> Option<JointIndex> {
        self.objects.get(index).map(|o| o.parent_joint)
    }

    /// Appends `object` and returns its index. No validation is performed.
    pub fn add_geometry_object(&mut self, object: GeometryObject) -> GeomIndex {
        let index = self.objects.len();
        debug!(index, name = %object.name, joint = object.parent_joint, "add geometry object");
        self.objects.push(object);
        index
    }

    /// Appends `object` after resolving its parent joint through `model`.
    ///
    /// When `object.parent_frame` is a valid frame of `model`, the declared
    /// `parent_joint` must match the frame's parent joint; the stored object
    /// then carries the model's joint. An out-of-range frame skips the check
    /// and keeps the declared joint.
    pub fn add_geometry_object_with_model<M>(
        &mut self,
        mut object: GeometryObject,
        model: &M,
    ) -> GeometryResult<GeomIndex>
    where
        M: FrameTree + ?Sized,
    {
        let frame = object.parent_frame;
        if frame < model.nframes() {
            if let Some(actual) = model.frame_parent_joint(frame) {
                if actual != object.parent_joint {
                    warn!(name = %object.name, frame, declared = object.parent_joint, actual, "joint/frame mismatch");
                    return Err(GeometryError::JointFrameMismatch {
                        name: object.name,
                        frame,
                        declared: object.parent_joint,
                        actual,
                    });
                }
                object.parent_joint = actual;
            }
        }
        Ok(self.add_geometry_object(object))
    }

    /// Index of the first object named `name`.
    ///
    /// Returns [`Self::ngeoms`] when no object matches. Absence is not an
    /// error here; callers compare the result against `ngeoms()`.
    pub fn get_geometry_id(&self, name: &str) -> GeomIndex {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .unwrap_or(self.objects.len())
    }

    /// Returns `true` if some object is named `name`.
    pub fn exist_geometry_name(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o.name == name)
    }

    fn check_pair(&self, pair: &CollisionPair) -> GeometryResult<()> {
        let ngeoms = self.objects.len();
        for index in [pair.first(), pair.second()] {
            if index >= ngeoms {
                warn!(%pair, ngeoms, "collision pair references unknown geometry");
                return Err(GeometryError::GeometryIndexOutOfRange { index, ngeoms });
            }
        }
        Ok(())
    }

    /// Registers `pair` unless it (or its reverse) is already present.
    pub fn add_collision_pair(&mut self, pair: CollisionPair) -> GeometryResult<()> {
        self.check_pair(&pair)?;
        if !self.exist_collision_pair(&pair) {
            debug!(%pair, index = self.pairs.len(), "add collision pair");
            self.pairs.push(pair);
        }
        Ok(())
    }

    /// Replaces the pair set with every pair of geometries on different joints.
    ///
    /// Pairs are emitted as `(i, j)` with `i < j`, ordered by `i` then `j`.
    /// Geometries sharing a joint never form a pair.
    pub fn add_all_collision_pairs(&mut self) {
        self.pairs.clear();
        for (i, a) in self.objects.iter().enumerate() {
            for (j, b) in self.objects.iter().enumerate().skip(i + 1) {
                if a.parent_joint != b.parent_joint {
                    self.pairs.push(CollisionPair::from_distinct(i, j));
                }
            }
        }
        debug!(npairs = self.pairs.len(), "add all collision pairs");
    }

    /// Removes `pair` (or its reverse) if present.
    pub fn remove_collision_pair(&mut self, pair: &CollisionPair) -> GeometryResult<()> {
        self.check_pair(pair)?;
        if let Some(index) = self.pairs.iter().position(|p| p == pair) {
            debug!(%pair, index, "remove collision pair");
            self.pairs.remove(index);
        }
        Ok(())
    }

    /// Removes every collision pair.
    pub fn remove_all_collision_pairs(&mut self) {
        debug!(npairs = self.pairs.len(), "remove all collision pairs");
        self.pairs.clear();
    }

    /// Returns `true` if `pair` (or its reverse) is registered.
    pub fn exist_collision_pair(&self, pair: &CollisionPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Index of `pair` (or its reverse).
    ///
    /// Returns [`Self::npairs`] when the pair is absent, mirroring
    /// [`Self::get_geometry_id`].
    pub fn find_collision_pair(&self, pair: &CollisionPair) -> PairIndex {
        self.pairs
            .iter()
            .position(|p| p == pair)
            .unwrap_or(self.pairs.len())
    }

    /// Moves every object of `other` to the end of this catalog.
    ///
    /// `other`'s pairs are re-registered with indices shifted by the previous
    /// geometry count, followed by every cross pair `(i, j)` between an
    /// existing geometry `i` and an appended geometry `j` on different joints.
    pub fn append_catalog(&mut self, other: GeometryCatalog) {
        let offset = self.objects.len();
        let GeometryCatalog { objects, pairs } = other;
        self.objects.extend(objects);
        self.pairs.extend(pairs.iter().map(|p| p.shifted(offset)));
        for i in 0..offset {
            let joint_i = self.objects[i].parent_joint;
            for j in offset..self.objects.len() {
                if joint_i != self.objects[j].parent_joint {
                    self.pairs.push(CollisionPair::from_distinct(i, j));
                }
            }
        }
        debug!(offset, ngeoms = self.objects.len(), npairs = self.pairs.len(), "append catalog");
    }
}

impl fmt::Display for GeometryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nb geometry objects = {}", self.objects.len())?;
        for object in &self.objects {
            writeln!(f, "{object}")?;
        }
        Ok(())
    }
}
