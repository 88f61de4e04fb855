//! Orrery configuration
//!
//! Every tunable constant of the scene and the simulation lives in
//! [`OrreryConfig`]. Defaults reproduce the stock scene; a JSON file can
//! override any subset of fields.

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::camera::Easing;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "ORRERY_CONFIG";
const CONFIG_FILE_NAME: &str = "orrery.json";

/// Scene and simulation configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Radians of orbit per second at speed multiplier 1.0.
    pub orbital_rate: f32,
    /// Sun self-rotation per tick, radians.
    pub sun_spin_step: f32,
    /// Planet self-rotation per tick, radians.
    pub planet_spin_step: f32,
    pub star_count: usize,
    /// Side length of the cube the stars are scattered in.
    pub star_field_extent: f32,
    /// Fixed seed for star positions and initial angles. Random when unset.
    pub star_seed: Option<u64>,
    pub camera_home: [f32; 3],
    pub camera_fov_degrees: f32,
    pub camera_far: f32,
    /// Fraction of a body's position the camera moves to on zoom.
    pub zoom_factor: f32,
    pub transition_seconds: f32,
    pub camera_easing: Easing,
    pub speed_min: f32,
    pub speed_max: f32,
    pub speed_step: f32,
    /// Tooltip offset from the pointer, logical pixels.
    pub tooltip_offset: [f32; 2],
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            orbital_rate: 0.5,
            sun_spin_step: 0.002,
            planet_spin_step: 0.01,
            star_count: 10_000,
            star_field_extent: 2000.0,
            star_seed: None,
            camera_home: [0.0, 0.0, 70.0],
            camera_fov_degrees: 75.0,
            camera_far: 1000.0,
            zoom_factor: 0.5,
            transition_seconds: 1.0,
            camera_easing: Easing::CubicInOut,
            speed_min: 0.0,
            speed_max: 5.0,
            speed_step: 0.1,
            tooltip_offset: [10.0, 10.0],
        }
    }
}

impl OrreryConfig {
    pub fn camera_home(&self) -> Vec3 {
        Vec3::from_array(self.camera_home)
    }

    /// Load configuration from `$ORRERY_CONFIG` or the platform config directory.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(p) => PathBuf::from(p),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Replace values that would break the scene with their defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !self.orbital_rate.is_finite() {
            self.orbital_rate = defaults.orbital_rate;
        }
        if !(self.transition_seconds.is_finite() && self.transition_seconds >= 0.0) {
            self.transition_seconds = defaults.transition_seconds;
        }
        if !(self.star_field_extent.is_finite() && self.star_field_extent > 0.0) {
            self.star_field_extent = defaults.star_field_extent;
        }
        if !(self.camera_fov_degrees > 1.0 && self.camera_fov_degrees < 179.0) {
            self.camera_fov_degrees = defaults.camera_fov_degrees;
        }
        if !(self.camera_far.is_finite() && self.camera_far > 1.0) {
            self.camera_far = defaults.camera_far;
        }
        if !(self.speed_min.is_finite()
            && self.speed_max.is_finite()
            && self.speed_min <= self.speed_max)
        {
            self.speed_min = defaults.speed_min;
            self.speed_max = defaults.speed_max;
        }
        if !(self.speed_step.is_finite() && self.speed_step > 0.0) {
            self.speed_step = defaults.speed_step;
        }
        self
    }
}

/// Platform config file location:
/// - macOS: ~/Library/Application Support/orrery/orrery.json
/// - Linux: ~/.config/orrery/orrery.json
/// - Windows: %APPDATA%\orrery\config\orrery.json
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orrery").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
