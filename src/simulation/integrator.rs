//! Fixed-step time integration for one body on the track
//!
//! A single semi-implicit Euler step driven by the net force from
//! `forces::net_force`, followed by the track boundary policy. The step is a
//! pure function: identical inputs always produce identical outputs, which is
//! what makes replay and the test suite deterministic.

use crate::simulation::forces::net_force;
use crate::simulation::params::MotionParams;

/// Kinematic output of one integration step, before any trail update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub finished: bool,
}

/// Advance one body by `dt` seconds along a track of length `track_length`.
///
/// Semi-implicit Euler: the velocity is updated first, then the position is
/// advanced with the *new* velocity
///   v_n+1 = v_n + a dt
///   x_n+1 = x_n + v_n+1 dt
///
/// Boundary policy:
/// - crossing the far end clamps to `track_length` and freezes the body
///   (finished, velocity and acceleration forced to zero)
/// - crossing the origin clamps to 0 with no bounce and no sign flip
pub fn step_body(
    position: f64,
    velocity: f64,
    params: &MotionParams,
    dt: f64,
    track_length: f64,
) -> StepOutcome {
    let f_net = net_force(params, velocity, dt);
    let acceleration = f_net / params.mass;

    let new_velocity = velocity + acceleration * dt;
    let mut new_position = position + new_velocity * dt;

    if new_position >= track_length {
        // Finish line: clamp and freeze regardless of the computed kinematics
        return StepOutcome {
            position: track_length,
            velocity: 0.0,
            acceleration: 0.0,
            finished: true,
        };
    }
    if new_position < 0.0 {
        // Start gate acts as a hard stop
        new_position = 0.0;
    }

    StepOutcome {
        position: new_position,
        velocity: new_velocity,
        acceleration,
        finished: false,
    }
}
