//! User interface module
//!
//! Control panel (pause, theme, per-planet speed sliders) built from feathers
//! widgets, plus the hover tooltip. Widget events are turned into
//! [`SimCommand`](crate::simulation::SimCommand) messages; everything shown
//! is refreshed from the simulation state.

use bevy::prelude::*;

pub mod panels;
pub mod state;
pub mod systems;

pub use state::{SpeedSlider, ThemePalette};

use crate::simulation::OrrerySystems;

/// Plugin for the control panel and tooltip
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(systems::on_speed_slider_change)
            .add_observer(systems::on_button_activate)
            .add_systems(Startup, (panels::spawn_control_panel, panels::spawn_tooltip))
            .add_systems(
                Update,
                (
                    systems::refresh_labels,
                    systems::sync_slider_values,
                    systems::update_tooltip,
                    systems::apply_theme,
                )
                    .in_set(OrrerySystems::Ui),
            );
    }
}
