// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Catalog builder utilities for tests.

use linkage_geom::{GeometryCatalog, GeometryObject, JointIndex};
use nalgebra::Isometry3;

use crate::shapes::Sphere;

/// Builder for catalogs made of spheres.
///
/// Every sphere declares frame `0`; tests exercising frame validation insert
/// objects directly.
///
/// # Example
///
/// ```
/// use linkage_dry_tests::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .sphere("a", 0, 0.5)
///     .sphere_at("b", 1, 0.5, [2.0, 0.0, 0.0])
///     .all_pairs()
///     .build();
/// assert_eq!(catalog.ngeoms(), 2);
/// assert_eq!(catalog.npairs(), 1);
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    objects: Vec<GeometryObject>,
    all_pairs: bool,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere at the joint origin.
    pub fn sphere(self, name: &str, joint: JointIndex, radius: f64) -> Self {
        self.sphere_at(name, joint, radius, [0.0, 0.0, 0.0])
    }

    /// Add a sphere offset from the joint origin by `offset`.
    pub fn sphere_at(mut self, name: &str, joint: JointIndex, radius: f64, offset: [f64; 3]) -> Self {
        let [x, y, z] = offset;
        let object = GeometryObject::new(name, joint, 0, Box::new(Sphere::new(radius)))
            .with_placement(Isometry3::translation(x, y, z));
        self.objects.push(object);
        self
    }

    /// Fill the pair set with every cross-joint pair after insertion.
    pub fn all_pairs(mut self) -> Self {
        self.all_pairs = true;
        self
    }

    /// Build the catalog.
    pub fn build(self) -> GeometryCatalog {
        let mut catalog = GeometryCatalog::new();
        for object in self.objects {
            catalog.add_geometry_object(object);
        }
        if self.all_pairs {
            catalog.add_all_collision_pairs();
        }
        catalog
    }
}

/// Three unit-radius spheres on joints `[0, 0, 1]` with every cross-joint
/// pair registered: `(0,2)` and `(1,2)`.
pub fn three_geometry_catalog() -> GeometryCatalog {
    CatalogBuilder::new()
        .sphere("base_left", 0, 1.0)
        .sphere("base_right", 0, 1.0)
        .sphere("arm", 1, 1.0)
        .all_pairs()
        .build()
}
