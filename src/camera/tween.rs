//! Retargetable camera position tween

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::camera::easing::Easing;
use crate::config::OrreryConfig;
use crate::simulation::SimulationState;

/// A single eased move of the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTween {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl CameraTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Position at the current elapsed time. Exactly `to` once finished.
    pub fn position(&self) -> Vec3 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.position()
    }
}

/// The in-flight camera transition, if any. Starting a new one replaces it.
#[derive(Resource, Debug, Default, Clone)]
pub struct CameraTransition {
    pub active: Option<CameraTween>,
}

impl CameraTransition {
    /// Begin moving from `current` to `target`, superseding any transition in flight.
    pub fn retarget(&mut self, current: Vec3, target: Vec3, config: &OrreryConfig) {
        self.active = Some(CameraTween::new(
            current,
            target,
            config.transition_seconds,
            config.camera_easing,
        ));
    }

    /// Advance the active tween. Returns the position to apply, if any.
    pub fn step(&mut self, dt: f32) -> Option<Vec3> {
        let tween = self.active.as_mut()?;
        let position = tween.advance(dt);
        if tween.is_finished() {
            self.active = None;
        }
        Some(position)
    }
}

/// Where a click sends the camera: halfway to the clicked planet, or home on a miss.
pub fn zoom_target(hit: Option<BodyId>, state: &SimulationState, config: &OrreryConfig) -> Vec3 {
    match hit {
        Some(id) => {
            let position = state.body_position(id);
            Vec3::new(
                position.x * config.zoom_factor,
                position.y * config.zoom_factor,
                id.descriptor().orbital_distance * config.zoom_factor,
            )
        }
        None => config.camera_home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tween_reaches_target_exactly() {
        let config = OrreryConfig::default();
        let mut transition = CameraTransition::default();
        transition.retarget(Vec3::new(12.3, 0.0, 17.5), config.camera_home(), &config);

        let mut last = None;
        // 61 frames of 1/60 s overshoot the one second duration.
        for _ in 0..61 {
            if let Some(p) = transition.step(1.0 / 60.0) {
                last = Some(p);
            }
        }
        assert_eq!(last, Some(Vec3::new(0.0, 0.0, 70.0)));
        assert!(transition.active.is_none());
    }

    #[test]
    fn test_tween_midpoint_follows_easing() {
        let mut tween = CameraTween::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
            Easing::CubicInOut,
        );
        let p = tween.advance(0.25);
        assert!((p.z - 10.0 * Easing::CubicInOut.apply(0.25)).abs() < 1e-5);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_retarget_replaces_in_flight_tween() {
        let config = OrreryConfig::default();
        let mut transition = CameraTransition::default();
        transition.retarget(Vec3::new(0.0, 0.0, 70.0), Vec3::new(5.0, 0.0, 5.0), &config);
        let midway = transition.step(0.5).expect("active");

        transition.retarget(midway, Vec3::new(-10.0, 0.0, 12.5), &config);
        let tween = transition.active.expect("active");
        assert_eq!(tween.from, midway);
        assert_eq!(tween.to, Vec3::new(-10.0, 0.0, 12.5));
        assert_eq!(tween.elapsed, 0.0);

        let mut last = midway;
        while let Some(p) = transition.step(0.1) {
            last = p;
        }
        assert_eq!(last, Vec3::new(-10.0, 0.0, 12.5));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = CameraTween::new(Vec3::ZERO, Vec3::ONE, 0.0, Easing::Linear);
        assert_eq!(tween.advance(0.0), Vec3::ONE);
    }

    #[test]
    fn test_zoom_target_hit_and_miss() {
        let config = OrreryConfig::default();
        let state = SimulationState::new(&mut StdRng::seed_from_u64(8));

        assert_eq!(zoom_target(None, &state, &config), Vec3::new(0.0, 0.0, 70.0));

        let mars = state.body_position(BodyId::Mars);
        let target = zoom_target(Some(BodyId::Mars), &state, &config);
        assert_eq!(target, Vec3::new(mars.x * 0.5, 0.0, 12.5));
    }
}
