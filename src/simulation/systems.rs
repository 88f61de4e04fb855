//! Simulation systems: command application, tick, and transform sync

use bevy::prelude::*;

use crate::bodies::{Planet, Sun};
use crate::config::OrreryConfig;
use crate::simulation::commands::{CommandOutcome, SimCommand};
use crate::simulation::state::SimulationState;

/// Apply queued control commands in arrival order
pub fn apply_sim_commands(
    mut commands: MessageReader<SimCommand>,
    mut state: ResMut<SimulationState>,
    config: Res<OrreryConfig>,
) {
    for command in commands.read() {
        match state.apply(*command, &config) {
            CommandOutcome::SpeedSet {
                body,
                requested,
                applied,
            } => {
                if requested != applied {
                    warn!(
                        "Speed {} for {} outside [{}, {}], clamped to {}",
                        requested,
                        body.descriptor().display_name,
                        config.speed_min,
                        config.speed_max,
                        applied
                    );
                } else {
                    debug!("Speed of {} set to {}", body.descriptor().display_name, applied);
                }
            }
            CommandOutcome::SpeedRejected { body, requested } => {
                warn!(
                    "Ignoring non-numeric speed {} for {}",
                    requested,
                    body.descriptor().display_name
                );
            }
            CommandOutcome::Paused(paused) => {
                info!("Simulation {}", if paused { "paused" } else { "resumed" });
            }
            CommandOutcome::ThemeChanged => {
                info!("Theme switched to {:?}", state.theme);
            }
        }
    }
}

/// Advance the simulation by the frame delta
pub fn advance_simulation(
    time: Res<Time>,
    config: Res<OrreryConfig>,
    mut state: ResMut<SimulationState>,
) {
    // Skip the change tick entirely while paused.
    if state.paused {
        return;
    }
    state.tick(time.delta_secs(), &config);
}

/// Copy angles and spins from the simulation onto the rendered entities
pub fn sync_body_transforms(
    state: Res<SimulationState>,
    mut planets: Query<(&Planet, &mut Transform), Without<Sun>>,
    mut sun: Query<&mut Transform, With<Sun>>,
) {
    if !state.is_changed() {
        return;
    }

    for (planet, mut transform) in &mut planets {
        let body = state.body(planet.0);
        transform.translation = state.body_position(planet.0);
        transform.rotation = Quat::from_rotation_y(body.spin);
    }

    for mut transform in &mut sun {
        transform.rotation = Quat::from_rotation_y(state.sun_spin);
    }
}
