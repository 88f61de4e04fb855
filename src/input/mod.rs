//! Input module
//!
//! Turns window, mouse and keyboard events into pointer state, viewport clicks
//! and simulation commands, and provides the ray picking used for hover and
//! click-to-zoom.

use bevy::prelude::*;

pub mod picking;
pub mod pointer;
pub mod systems;

pub use picking::{pick_planet, pointer_ray};
pub use pointer::{PointerState, normalize_pointer};
pub use systems::{ViewportClicked, ViewportSize};

use crate::simulation::OrrerySystems;

/// Plugin for pointer, keyboard and window input
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_message::<ViewportClicked>()
            .add_systems(Startup, systems::init_viewport_size)
            .add_systems(
                Update,
                (
                    (
                        systems::handle_resize,
                        systems::track_pointer,
                        systems::detect_viewport_clicks,
                        systems::keyboard_shortcuts,
                    )
                        .chain()
                        .in_set(OrrerySystems::Input),
                    systems::update_hover.in_set(OrrerySystems::Picking),
                ),
            );
    }
}
