//! Typed commands issued by the controls

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::config::OrreryConfig;
use crate::simulation::state::SimulationState;

/// A user request against [`SimulationState`]
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    SetSpeed(BodyId, f32),
    TogglePause,
    ToggleTheme,
}

/// Result of applying a [`SimCommand`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// Speed written; the value may differ from the request if it was clamped.
    SpeedSet { body: BodyId, requested: f32, applied: f32 },
    SpeedRejected { body: BodyId, requested: f32 },
    Paused(bool),
    ThemeChanged,
}

impl SimulationState {
    pub fn apply(&mut self, command: SimCommand, config: &OrreryConfig) -> CommandOutcome {
        match command {
            SimCommand::SetSpeed(body, requested) => {
                if !requested.is_finite() {
                    return CommandOutcome::SpeedRejected { body, requested };
                }
                let applied = requested.clamp(config.speed_min, config.speed_max);
                self.body_mut(body).speed_multiplier = applied;
                CommandOutcome::SpeedSet {
                    body,
                    requested,
                    applied,
                }
            }
            SimCommand::TogglePause => {
                self.paused = !self.paused;
                CommandOutcome::Paused(self.paused)
            }
            SimCommand::ToggleTheme => {
                self.theme = self.theme.toggled();
                CommandOutcome::ThemeChanged
            }
        }
    }
}

/// Text for a speed label: `"1x"`, `"1.5x"`, `"0.3x"`.
///
/// Rounded to the slider resolution so stepped values print without float noise.
pub fn speed_label(multiplier: f32) -> String {
    let rounded = (multiplier * 10.0).round() / 10.0;
    format!("{rounded}x")
}
