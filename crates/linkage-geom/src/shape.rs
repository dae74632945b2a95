// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Opaque shape handles carried by geometry objects.
use core::any::Any;
use core::fmt;

/// Shape representation owned by a geometry object.
///
/// The catalog never inspects shapes; it only stores them and hands them to a
/// proximity engine, which recovers its concrete type through [`Shape::as_any`].
/// Shapes must be `Send + Sync` so a finished catalog can be shared across
/// worker threads.
pub trait Shape: fmt::Debug + Send + Sync + 'static {
    /// Short label used in diagnostic output (e.g. `"sphere"`).
    fn kind(&self) -> &'static str;

    /// Upcast used by engines to downcast to their concrete shape type.
    fn as_any(&self) -> &dyn Any;
}

/// Owned shape handle; the shape is dropped together with its object.
pub type ShapeHandle = Box<dyn Shape>;
