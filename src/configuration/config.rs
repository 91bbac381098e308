//! Configuration types for loading track scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! track scenario. A scenario consists of:
//!
//! - [`GlobalConfig`]   – track-wide settings (track length, time scale)
//! - [`BodyConfig`]     – one entry per body on the track
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! globals:
//!   track_length: 300.0     # shared finish line (m)
//!   time_scale: 1.0         # simulation seconds per real second
//!
//! bodies:
//!   - name: "blossom"
//!     color: "ff69b4"
//!     force: 75.0           # applied force (N)
//!     mass: 5.0             # mass (kg)
//!     friction: 0.1         # kinetic friction coefficient (mu)
//!     drag: 0.015           # quadratic drag coefficient (k)
//!     initial_velocity: 0.0 # launch velocity (m/s)
//! ```
//!
//! Every field is range-checked before any value reaches the simulation core;
//! out-of-range values are reported as a [`ConfigError`], never clamped.

use serde::Deserialize;
use thiserror::Error;

// Valid ranges, matching the sliders the lab UI exposes
pub const TRACK_LENGTH_RANGE: (f64, f64) = (10.0, 1000.0);
pub const TIME_SCALE_RANGE: (f64, f64) = (0.1, 5.0);
pub const INITIAL_VELOCITY_RANGE: (f64, f64) = (0.0, 100.0);
pub const FORCE_RANGE: (f64, f64) = (0.0, 1000.0);
pub const MASS_RANGE: (f64, f64) = (1.0, 100.0);
pub const FRICTION_RANGE: (f64, f64) = (0.0, 1.0);
pub const DRAG_RANGE: (f64, f64) = (0.0, 0.2);

/// Boundary validation failure; the core never sees a value that failed here
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} = {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{0} can only change while the simulation is idle")]
    SimulationActive(&'static str),

    #[error("no body at index {0}")]
    UnknownBody(usize),

    #[error("scenario defines no bodies")]
    NoBodies,
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    // NaN fails both comparisons and is rejected along with out-of-range values
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}

pub fn check_track_length(value: f64) -> Result<(), ConfigError> {
    check_range("track_length", value, TRACK_LENGTH_RANGE)
}

pub fn check_time_scale(value: f64) -> Result<(), ConfigError> {
    check_range("time_scale", value, TIME_SCALE_RANGE)
}

pub fn check_body_values(
    force: f64,
    mass: f64,
    friction: f64,
    drag: f64,
    initial_velocity: f64,
) -> Result<(), ConfigError> {
    check_range("force", force, FORCE_RANGE)?;
    check_range("mass", mass, MASS_RANGE)?;
    check_range("friction", friction, FRICTION_RANGE)?;
    check_range("drag", drag, DRAG_RANGE)?;
    check_range("initial_velocity", initial_velocity, INITIAL_VELOCITY_RANGE)
}

/// Track-wide settings
#[derive(Deserialize, Debug, Clone)]
pub struct GlobalConfig {
    pub track_length: f64, // shared finish line for all bodies (m)
    pub time_scale: f64,   // simulation clock speed, 1.0 is real-time
}

/// Configuration for a single body on the track
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,          // stable identity, shown by the viewer
    pub color: String,         // hex color without '#', e.g. "ff69b4"
    pub force: f64,            // applied force (N)
    pub mass: f64,             // mass (kg)
    pub friction: f64,         // kinetic friction coefficient (mu)
    pub drag: f64,             // quadratic drag coefficient (k)
    pub initial_velocity: f64, // launch velocity (m/s)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub globals: GlobalConfig,  // track-wide settings
    pub bodies: Vec<BodyConfig>, // bodies lined up at the start gate
}

impl ScenarioConfig {
    /// Range-check every field against the table above.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        check_track_length(self.globals.track_length)?;
        check_time_scale(self.globals.time_scale)?;
        for body in &self.bodies {
            check_body_values(body.force, body.mass, body.friction, body.drag, body.initial_velocity)?;
        }
        Ok(())
    }
}
