// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture shapes understood by [`crate::SphereEngine`].

use core::any::Any;

use linkage_geom::Shape;

/// Ball centered on the geometry origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Ball radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere of the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Sphere {
    fn kind(&self) -> &'static str {
        "sphere"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Zero-size marker; the engine treats it as a sphere of radius 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point;

impl Shape for Point {
    fn kind(&self) -> &'static str {
        "point"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
