//! Runtime simulation state and the per-frame tick

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bodies::{BodyId, PLANETS};
use crate::config::OrreryConfig;
use crate::input::PointerState;

/// Mutable per-planet state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRuntimeState {
    /// Orbital angle in radians. Never wrapped; only its sine and cosine are used.
    pub current_angle: f32,
    pub speed_multiplier: f32,
    /// Self-rotation about the vertical axis, radians.
    pub spin: f32,
}

/// Colour scheme of the window and the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Text of the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// Whether a tick moved anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    Frozen,
}

/// Everything the frame loop reads and writes, owned as one resource.
#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    pub bodies: [BodyRuntimeState; 8],
    pub sun_spin: f32,
    pub paused: bool,
    pub theme: Theme,
    /// Last pointer position over the window, if any.
    pub pointer: Option<PointerState>,
    /// Planet currently under the pointer.
    pub hovered: Option<BodyId>,
}

impl SimulationState {
    /// Fresh state with every planet at a uniformly random angle in `[0, 2π)`.
    pub fn new(rng: &mut impl Rng) -> Self {
        let bodies = std::array::from_fn(|i| BodyRuntimeState {
            current_angle: rng.gen_range(0.0..TAU),
            speed_multiplier: PLANETS[i].base_angular_speed,
            spin: 0.0,
        });
        Self {
            bodies,
            sun_spin: 0.0,
            paused: false,
            theme: Theme::default(),
            pointer: None,
            hovered: None,
        }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        match config.star_seed {
            // Offset so the angles don't share a stream with the starfield.
            Some(seed) => Self::new(&mut StdRng::seed_from_u64(seed.wrapping_add(1))),
            None => Self::new(&mut rand::thread_rng()),
        }
    }

    pub fn body(&self, id: BodyId) -> &BodyRuntimeState {
        &self.bodies[id.index()]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut BodyRuntimeState {
        &mut self.bodies[id.index()]
    }

    /// Current world position of a planet.
    pub fn body_position(&self, id: BodyId) -> Vec3 {
        orbit_position(self.body(id).current_angle, id.descriptor().orbital_distance)
    }

    /// Advance every body by `elapsed` seconds unless paused.
    pub fn tick(&mut self, elapsed: f32, config: &OrreryConfig) -> TickOutcome {
        if self.paused {
            return TickOutcome::Frozen;
        }

        self.sun_spin += config.sun_spin_step;
        for body in &mut self.bodies {
            body.current_angle += elapsed * body.speed_multiplier * config.orbital_rate;
            body.spin += config.planet_spin_step;
        }
        TickOutcome::Advanced
    }

    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Pause" }
    }
}

impl FromWorld for SimulationState {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<OrreryConfig>()
            .cloned()
            .unwrap_or_default();
        Self::from_config(&config)
    }
}

/// Position on a circular orbit in the XZ plane.
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> SimulationState {
        SimulationState::new(&mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_initial_angles_in_range() {
        for seed in 0..50 {
            let state = SimulationState::new(&mut StdRng::seed_from_u64(seed));
            for body in &state.bodies {
                assert!(body.current_angle >= 0.0 && body.current_angle < TAU);
                assert_eq!(body.speed_multiplier, 1.0);
            }
        }
    }

    #[test]
    fn test_initial_angles_are_not_aligned() {
        let state = seeded_state();
        let first = state.bodies[0].current_angle;
        assert!(state.bodies.iter().any(|b| b.current_angle != first));
    }

    #[test]
    fn test_tick_advances_angle_exactly() {
        let config = OrreryConfig::default();
        let mut state = seeded_state();
        state.body_mut(BodyId::Venus).speed_multiplier = 3.5;
        let before = state.clone();

        let dt = 0.016_f32;
        assert_eq!(state.tick(dt, &config), TickOutcome::Advanced);

        for (after, before) in state.bodies.iter().zip(before.bodies.iter()) {
            let expected =
                before.current_angle + dt * before.speed_multiplier * config.orbital_rate;
            assert_eq!(after.current_angle, expected);
            assert_eq!(after.spin, before.spin + config.planet_spin_step);
        }
        assert_eq!(state.sun_spin, before.sun_spin + config.sun_spin_step);
    }

    #[test]
    fn test_zero_delta_only_spins() {
        let config = OrreryConfig::default();
        let mut state = seeded_state();
        let before = state.clone();
        state.tick(0.0, &config);
        for (after, before) in state.bodies.iter().zip(before.bodies.iter()) {
            assert_eq!(after.current_angle, before.current_angle);
        }
    }

    #[test]
    fn test_paused_tick_is_frozen() {
        let config = OrreryConfig::default();
        let mut state = seeded_state();
        state.paused = true;
        let before = state.clone();

        for _ in 0..300 {
            assert_eq!(state.tick(5.0 / 300.0, &config), TickOutcome::Frozen);
        }

        assert_eq!(state.bodies, before.bodies);
        assert_eq!(state.sun_spin.to_bits(), before.sun_spin.to_bits());
        for (after, before) in state.bodies.iter().zip(before.bodies.iter()) {
            assert_eq!(after.current_angle.to_bits(), before.current_angle.to_bits());
        }
    }

    #[test]
    fn test_orbit_position_is_coplanar() {
        let theta = 1.234_f32;
        let d = 25.0;
        let pos = orbit_position(theta, d);
        assert_eq!(pos, Vec3::new(d * theta.cos(), 0.0, d * theta.sin()));
        assert_eq!(orbit_position(0.0, d), Vec3::new(d, 0.0, 0.0));
    }

    #[test]
    fn test_speed_ratio_over_ten_seconds() {
        let config = OrreryConfig::default();
        let mut state = seeded_state();
        state.body_mut(BodyId::Mars).speed_multiplier = 2.0;
        state.body_mut(BodyId::Earth).speed_multiplier = 1.0;
        let mars_before = state.body(BodyId::Mars).current_angle;
        let earth_before = state.body(BodyId::Earth).current_angle;

        state.tick(10.0, &config);

        let mars_delta = state.body(BodyId::Mars).current_angle - mars_before;
        let earth_delta = state.body(BodyId::Earth).current_angle - earth_before;
        assert!((mars_delta - 10.0).abs() < 1e-4, "mars delta {mars_delta}");
        assert!((earth_delta - 5.0).abs() < 1e-4, "earth delta {earth_delta}");
        assert!((mars_delta - 2.0 * earth_delta).abs() < 1e-4);
    }

    #[test]
    fn test_labels() {
        let mut state = seeded_state();
        assert_eq!(state.pause_label(), "Pause");
        state.paused = true;
        assert_eq!(state.pause_label(), "Resume");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_seeded_config_is_deterministic() {
        let config = OrreryConfig {
            star_seed: Some(9),
            ..Default::default()
        };
        let a = SimulationState::from_config(&config);
        let b = SimulationState::from_config(&config);
        assert_eq!(a.bodies, b.bodies);
    }
}
