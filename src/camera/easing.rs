//! Camera easing curves, chosen by name in the config

use bevy::math::curve::{Curve, EaseFunction};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    QuadInOut,
    /// Slow start and end; the default camera curve.
    #[default]
    CubicInOut,
    SineInOut,
}

impl Easing {
    pub fn ease_function(self) -> EaseFunction {
        match self {
            Easing::Linear => EaseFunction::Linear,
            Easing::QuadInOut => EaseFunction::QuadraticInOut,
            Easing::CubicInOut => EaseFunction::CubicInOut,
            Easing::SineInOut => EaseFunction::SineInOut,
        }
    }

    /// Eased value for normalised time `t`, clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        self.ease_function().sample_clamped(t)
    }
}
