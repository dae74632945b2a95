// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for linkage crates.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog builder and the canonical three-geometry scenario
//! - [`config`] - Proximity config fixtures parsed from JSON
//! - [`engine`] - Sphere-only proximity engine fake with call counting
//! - [`frames`] - Frame list fake implementing `FrameTree`
//! - [`shapes`] - Fixture shapes
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod frames;
pub mod shapes;

pub use catalog::{three_geometry_catalog, CatalogBuilder};
pub use config::{config_from_json, contact_config};
pub use engine::SphereEngine;
pub use frames::FrameList;
pub use shapes::{Point, Sphere};
