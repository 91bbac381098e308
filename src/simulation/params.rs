//! Physical constants and runtime parameters for the track simulation
//!
//! `MotionParams` holds the per-body settings (applied force, mass, friction,
//! drag, launch velocity), `GlobalParams` the track-wide ones (track length,
//! time scale). Defaults are the calibrated classroom values: with
//! m = 5 kg, mu = 0.1, k = 0.015, F = 75 N the quadratic-drag solution
//! x(t) = (m/k) * ln(cosh(sqrt(k*F_net)/m * t)) gives x(8) ~ 302 m,
//! so the default body covers the default 300 m track in about 8 s.

/// Standard Earth gravity (m/s^2)
pub const GRAVITY: f64 = 9.81;

/// Static friction is typically ~20% higher than kinetic
pub const STATIC_FRICTION_MULTIPLIER: f64 = 1.2;

/// Below this speed a body counts as at rest (m/s)
pub const REST_VELOCITY_EPS: f64 = 0.001;

/// Most trail entries kept per body
pub const TRAIL_MAX_LEN: usize = 120;

/// Opacity subtracted from every trail entry each tick
pub const TRAIL_FADE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct MotionParams {
    pub force: f64,            // applied force (N), constant thrust
    pub mass: f64,             // mass (kg)
    pub friction: f64,         // kinetic friction coefficient (mu)
    pub drag: f64,             // quadratic drag coefficient (k)
    pub initial_velocity: f64, // launch velocity at t = 0 (m/s)
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            force: 75.0,
            mass: 5.0,
            friction: 0.1,
            drag: 0.015,
            initial_velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalParams {
    pub track_length: f64, // shared track length (m), finish line for every body
    pub time_scale: f64,   // simulation seconds per real second
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            track_length: 300.0,
            time_scale: 1.0,
        }
    }
}
