//! Body registry
//!
//! Static data for the sun and planets, plus the marker components that bind
//! spawned entities back to their registry entry.

use bevy::prelude::*;

pub mod registry;

pub use registry::{BodyDescriptor, BodyId, PLANETS, SUN};

/// Marker component for the sun entity
#[derive(Component)]
pub struct Sun;

/// Component binding a planet entity to its registry entry
#[derive(Component, Copy, Clone, Debug, Deref)]
pub struct Planet(pub BodyId);

/// Marker component for orbit ring entities
#[derive(Component)]
pub struct OrbitRing;

/// Marker component for the starfield point cloud
#[derive(Component)]
pub struct Starfield;
