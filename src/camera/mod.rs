//! Camera controller
//!
//! Eased camera transitions driven by clicks on the 3D view: a planet hit
//! zooms halfway towards it, a miss returns to the overview position.

use bevy::prelude::*;

pub mod easing;
pub mod systems;
pub mod tween;

pub use easing::Easing;
pub use tween::{CameraTransition, CameraTween, zoom_target};

use crate::simulation::OrrerySystems;

/// Marker component for the camera the scene is rendered and picked from
#[derive(Component)]
pub struct MainCamera;

/// Plugin for click-to-zoom camera transitions
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTransition>().add_systems(
            Update,
            (
                systems::handle_viewport_clicks,
                systems::advance_camera_transition,
            )
                .chain()
                .in_set(OrrerySystems::Camera),
        );
    }
}
