// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Joint-keyed geometry index used to prune the pair set per joint.
//!
//! For each joint the index keeps two lists:
//! - *inner*: geometries rigidly attached to the joint, in catalog order;
//! - *outer*: the second member of every pair whose first member is attached
//!   to the joint, in pair order.
//!
//! A broad-phase scan can then visit one joint bucket at a time instead of the
//! full pair list. The index is a snapshot of the catalog taken at build time;
//! it does not follow later catalog edits.
use std::collections::BTreeMap;

use crate::catalog::GeometryCatalog;
use crate::ident::{GeomIndex, JointIndex};

/// Joint → geometry lists derived from a [`GeometryCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JointGeometryIndex {
    inner: BTreeMap<JointIndex, Vec<GeomIndex>>,
    outer: BTreeMap<JointIndex, Vec<GeomIndex>>,
}

impl JointGeometryIndex {
    /// Builds the index for `catalog`.
    #[must_use]
    pub fn build(catalog: &GeometryCatalog) -> Self {
        let mut index = Self::default();
        index.rebuild(catalog);
        index
    }

    /// Clears both maps and refills them from `catalog`.
    pub fn rebuild(&mut self, catalog: &GeometryCatalog) {
        self.inner.clear();
        self.outer.clear();

        for (gid, object) in catalog.geometry_objects().iter().enumerate() {
            self.inner.entry(object.parent_joint).or_default().push(gid);
        }

        let objects = catalog.geometry_objects();
        for pair in catalog.collision_pairs() {
            // Pairs were range-checked on insertion.
            if let Some(first) = objects.get(pair.first()) {
                self.outer
                    .entry(first.parent_joint)
                    .or_default()
                    .push(pair.second());
            }
        }
    }

    /// Geometries attached to `joint`.
    pub fn inner(&self, joint: JointIndex) -> &[GeomIndex] {
        self.inner.get(&joint).map(Vec::as_slice).unwrap_or_default()
    }

    /// Declared partners of the geometries attached to `joint`.
    pub fn outer(&self, joint: JointIndex) -> &[GeomIndex] {
        self.outer.get(&joint).map(Vec::as_slice).unwrap_or_default()
    }

    /// Cross product of `inner(joint)` and `outer(joint)`, skipping self-pairs.
    ///
    /// This over-approximates the declared pairs keyed by `joint`; callers
    /// confirm each candidate against the catalog's pair list.
    pub fn candidate_pairs(
        &self,
        joint: JointIndex,
    ) -> impl Iterator<Item = (GeomIndex, GeomIndex)> + '_ {
        let outer = self.outer(joint);
        self.inner(joint)
            .iter()
            .flat_map(move |&g| outer.iter().map(move |&h| (g, h)))
            .filter(|(g, h)| g != h)
    }

    /// Full inner map, ordered by joint.
    pub fn inner_map(&self) -> &BTreeMap<JointIndex, Vec<GeomIndex>> {
        &self.inner
    }

    /// Full outer map, ordered by joint.
    pub fn outer_map(&self) -> &BTreeMap<JointIndex, Vec<GeomIndex>> {
        &self.outer
    }

    /// Joints that carry at least one geometry, ascending.
    pub fn joints(&self) -> impl Iterator<Item = JointIndex> + '_ {
        self.inner.keys().copied()
    }

    /// Returns `true` when the index holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::GeometryObject;
    use crate::pair::CollisionPair;
    use crate::shape::Shape;
    use core::any::Any;

    #[derive(Debug)]
    struct Dot;

    impl Shape for Dot {
        fn kind(&self) -> &'static str {
            "dot"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn catalog_on(joints: &[JointIndex]) -> GeometryCatalog {
        let mut catalog = GeometryCatalog::new();
        for (i, &joint) in joints.iter().enumerate() {
            catalog.add_geometry_object(GeometryObject::new(format!("g{i}"), joint, 0, Box::new(Dot)));
        }
        catalog
    }

    #[test]
    fn inner_lists_follow_catalog_order() {
        let catalog = catalog_on(&[2, 0, 2, 1]);
        let index = JointGeometryIndex::build(&catalog);
        assert_eq!(index.inner(0), &[1]);
        assert_eq!(index.inner(1), &[3]);
        assert_eq!(index.inner(2), &[0, 2]);
        assert!(index.inner(9).is_empty());
        assert_eq!(index.joints().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn outer_lists_are_keyed_by_first_member_joint() {
        let mut catalog = catalog_on(&[0, 0, 1]);
        catalog
            .add_collision_pair(CollisionPair::new(2, 0).expect("distinct"))
            .expect("in range");
        catalog
            .add_collision_pair(CollisionPair::new(1, 2).expect("distinct"))
            .expect("in range");
        let index = JointGeometryIndex::build(&catalog);
        assert_eq!(index.outer(1), &[0]);
        assert_eq!(index.outer(0), &[2]);
        assert_eq!(index.candidate_pairs(0).collect::<Vec<_>>(), vec![(0, 2), (1, 2)]);
        assert_eq!(index.candidate_pairs(1).collect::<Vec<_>>(), vec![(2, 0)]);
    }

    #[test]
    fn rebuild_discards_previous_snapshot() {
        let mut catalog = catalog_on(&[0, 1]);
        catalog.add_all_collision_pairs();
        let mut index = JointGeometryIndex::build(&catalog);
        assert_eq!(index.outer(0), &[1]);

        catalog.remove_all_collision_pairs();
        index.rebuild(&catalog);
        assert!(index.outer(0).is_empty());
        assert_eq!(index.inner(1), &[1]);
    }
}
