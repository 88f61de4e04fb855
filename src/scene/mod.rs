//! Scene construction
//!
//! Builds everything that is rendered exactly once at startup. Nothing here
//! runs per frame; the simulation moves the planets afterwards.

use bevy::prelude::*;

pub mod builder;
pub mod starfield;

pub use builder::{build_scene, orbit_ring_radii, setup_rig};

/// Plugin for the startup scene
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_rig, build_scene));
    }
}
