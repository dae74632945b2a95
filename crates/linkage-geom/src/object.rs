// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry objects: one collidable or renderable shape rigidly attached to a joint.
use core::fmt;
use std::path::PathBuf;

use nalgebra::Isometry3;

use crate::ident::{FrameIndex, JointIndex};
use crate::shape::{Shape, ShapeHandle};

/// Default RGBA color used when a geometry does not specify one.
pub const DEFAULT_MESH_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// One shape attached to a joint of the kinematic model.
///
/// `parent_frame` is only consulted by
/// [`crate::GeometryCatalog::add_geometry_object_with_model`] to validate and
/// resolve `parent_joint`; the catalog never reads it afterwards.
#[derive(Debug)]
pub struct GeometryObject {
    /// Name used for lookups; expected to be unique within a catalog.
    pub name: String,
    /// Joint whose body frame the shape is rigidly attached to.
    pub parent_joint: JointIndex,
    /// Frame the shape was declared against.
    pub parent_frame: FrameIndex,
    /// Placement of the shape relative to the parent joint frame.
    pub placement: Isometry3<f64>,
    /// Shape handed to the proximity engine.
    pub shape: ShapeHandle,
    /// Mesh file backing the shape, if any.
    pub mesh_path: Option<PathBuf>,
    /// Per-axis mesh scale.
    pub mesh_scale: [f64; 3],
    /// Whether `mesh_color` replaces the mesh's own material.
    pub override_material: bool,
    /// RGBA display color.
    pub mesh_color: [f32; 4],
}

impl GeometryObject {
    /// Creates an object with identity placement and default mesh attributes.
    pub fn new(
        name: impl Into<String>,
        parent_joint: JointIndex,
        parent_frame: FrameIndex,
        shape: ShapeHandle,
    ) -> Self {
        Self {
            name: name.into(),
            parent_joint,
            parent_frame,
            placement: Isometry3::identity(),
            shape,
            mesh_path: None,
            mesh_scale: [1.0, 1.0, 1.0],
            override_material: false,
            mesh_color: DEFAULT_MESH_COLOR,
        }
    }

    /// Sets the placement relative to the parent joint frame.
    pub fn with_placement(mut self, placement: Isometry3<f64>) -> Self {
        self.placement = placement;
        self
    }

    /// Records the mesh file backing this shape.
    pub fn with_mesh_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mesh_path = Some(path.into());
        self
    }

    /// Sets the per-axis mesh scale.
    pub fn with_mesh_scale(mut self, scale: [f64; 3]) -> Self {
        self.mesh_scale = scale;
        self
    }

    /// Overrides the mesh material with a flat RGBA color.
    pub fn with_color(mut self, rgba: [f32; 4]) -> Self {
        self.mesh_color = rgba;
        self.override_material = true;
        self
    }

    /// Borrow the shape as a trait object.
    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }
}

impl fmt::Display for GeometryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.placement.translation.vector;
        let q = self.placement.rotation.coords;
        write!(
            f,
            "Name: {} | Parent joint: {} | Parent frame: {} | Shape: {} | Position in parent frame: t=[{}, {}, {}] q=[{}, {}, {}, {}]",
            self.name,
            self.parent_joint,
            self.parent_frame,
            self.shape.kind(),
            t.x,
            t.y,
            t.z,
            q.x,
            q.y,
            q.z,
            q.w,
        )?;
        match &self.mesh_path {
            Some(path) => write!(f, " | Mesh: {}", path.display()),
            None => Ok(()),
        }
    }
}
