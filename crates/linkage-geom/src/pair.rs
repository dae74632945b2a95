// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision pairs: unordered references to two distinct geometries.
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{GeometryError, GeometryResult};
use crate::ident::GeomIndex;

/// Two distinct geometry indices whose proximity should be evaluated.
///
/// The stored order is kept as given (it decides which member keys the
/// joint-to-outer-geometry index), but equality and hashing are order-free:
/// `(a, b) == (b, a)`. A catalog therefore rejects a pair whose reverse is
/// already registered.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(GeomIndex, GeomIndex)", into = "(GeomIndex, GeomIndex)")
)]
pub struct CollisionPair {
    first: GeomIndex,
    second: GeomIndex,
}

impl CollisionPair {
    /// Builds a pair, rejecting `first == second`.
    pub fn new(first: GeomIndex, second: GeomIndex) -> GeometryResult<Self> {
        if first == second {
            return Err(GeometryError::DegeneratePair { index: first });
        }
        Ok(Self { first, second })
    }

    /// Builds a pair whose members the caller already knows to be distinct.
    pub(crate) const fn from_distinct(first: GeomIndex, second: GeomIndex) -> Self {
        debug_assert!(first != second);
        Self { first, second }
    }

    /// First member, as stored.
    #[must_use]
    pub const fn first(&self) -> GeomIndex {
        self.first
    }

    /// Second member, as stored.
    #[must_use]
    pub const fn second(&self) -> GeomIndex {
        self.second
    }

    /// Members ordered as `(min, max)`.
    #[must_use]
    pub fn canonical(&self) -> (GeomIndex, GeomIndex) {
        (self.first.min(self.second), self.first.max(self.second))
    }

    /// Same pair with the given offset added to both members.
    #[must_use]
    pub(crate) const fn shifted(&self, offset: usize) -> Self {
        Self {
            first: self.first + offset,
            second: self.second + offset,
        }
    }
}

impl PartialEq for CollisionPair {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for CollisionPair {}

impl Hash for CollisionPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl TryFrom<(GeomIndex, GeomIndex)> for CollisionPair {
    type Error = GeometryError;

    fn try_from((first, second): (GeomIndex, GeomIndex)) -> GeometryResult<Self> {
        Self::new(first, second)
    }
}

impl From<CollisionPair> for (GeomIndex, GeomIndex) {
    fn from(pair: CollisionPair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for CollisionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collision pair ({},{})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reverse_pair_is_equal_and_hashes_alike() {
        let ab = CollisionPair::new(1, 4).expect("distinct members");
        let ba = CollisionPair::new(4, 1).expect("distinct members");
        assert_eq!(ab, ba);
        assert_eq!(ba.first(), 4);
        let set: HashSet<_> = [ab, ba].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn self_pair_is_rejected() {
        assert_eq!(
            CollisionPair::new(2, 2),
            Err(GeometryError::DegeneratePair { index: 2 })
        );
        assert!(CollisionPair::try_from((3, 3)).is_err());
    }

    #[test]
    fn display_keeps_stored_order() {
        let p = CollisionPair::new(5, 0).expect("distinct members");
        assert_eq!(p.to_string(), "collision pair (5,0)");
        assert_eq!(p.canonical(), (0, 5));
    }
}
