//! Force balance for a single body on the track
//!
//! Sums the applied force against kinetic/static friction and quadratic
//! air drag, per Newton's second law: F_net = F_app - F_fric - F_drag.
//! Friction switches between a static regime (body locked at rest) and a
//! kinetic regime (opposing the direction of motion).

use crate::simulation::params::{MotionParams, GRAVITY, REST_VELOCITY_EPS, STATIC_FRICTION_MULTIPLIER};

/// Net force (N) on a body with parameters `p` moving at `velocity`.
///
/// `dt` is the step the caller is about to integrate over; it is needed here
/// because friction and drag may only stop a body within a step, never reverse
/// it. When the hypothetical velocity after `dt` would flip sign past the rest
/// threshold, the force is replaced by the exact value that brings the body to
/// zero velocity this step.
pub fn net_force(p: &MotionParams, velocity: f64, dt: f64) -> f64 {
    // Kinetic friction: Fk = mu * m * g
    // Static friction ceiling: Fs_max = Fk * multiplier
    let f_fric_k = p.friction * p.mass * GRAVITY;
    let f_fric_s_max = f_fric_k * STATIC_FRICTION_MULTIPLIER;

    // Quadratic air drag: Fd = k * v * |v| (sign follows velocity)
    let f_drag = p.drag * velocity * velocity.abs();

    if velocity.abs() < REST_VELOCITY_EPS {
        // At rest: check the static friction threshold
        if p.force.abs() > f_fric_s_max {
            // Static friction breaks, kinetic takes over
            p.force - p.force.signum() * f_fric_k - f_drag
        } else {
            // Locked by static friction
            0.0
        }
    } else {
        // In motion: kinetic friction opposes the velocity direction
        let mut f_net = p.force - velocity.signum() * f_fric_k - f_drag;

        // Friction/drag can only stop a body, not reverse it within one step.
        // If the hypothetical velocity after dt flips sign, substitute the
        // exact force that lands the velocity on zero this step.
        if dt > 0.0 {
            let a = f_net / p.mass;
            let v_next = velocity + a * dt;
            if v_next.signum() != velocity.signum() && v_next.abs() > REST_VELOCITY_EPS {
                f_net = -velocity * p.mass / dt;
            }
        }
        f_net
    }
}
