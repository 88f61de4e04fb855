//! Simulation module
//!
//! Owns the runtime state of the orrery (angles, speeds, pause, theme,
//! pointer, hover) and the per-frame tick. Controls never touch the state
//! directly; they write [`SimCommand`] messages that are applied in one place.

use bevy::prelude::*;

pub mod commands;
pub mod state;
pub mod systems;

pub use commands::{SimCommand, speed_label};
pub use state::{BodyRuntimeState, SimulationState, Theme, TickOutcome, orbit_position};

/// Ordering of the frame loop. Chained, so nothing here runs in parallel.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrrerySystems {
    /// Raw window/pointer/keyboard events become state and commands.
    Input,
    Commands,
    Tick,
    /// Hover and click picking against the freshly synced bodies.
    Picking,
    Camera,
    Ui,
}

/// Plugin for the simulation state and frame loop
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .add_message::<SimCommand>()
            .configure_sets(
                Update,
                (
                    OrrerySystems::Input,
                    OrrerySystems::Commands,
                    OrrerySystems::Tick,
                    OrrerySystems::Picking,
                    OrrerySystems::Camera,
                    OrrerySystems::Ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    systems::apply_sim_commands.in_set(OrrerySystems::Commands),
                    (systems::advance_simulation, systems::sync_body_transforms)
                        .chain()
                        .in_set(OrrerySystems::Tick),
                ),
            );
    }
}
