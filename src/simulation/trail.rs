//! Fading position trails
//!
//! Each active body leaves a bounded history of recent positions consumed by
//! the viewer. The trail is render-only data: it never feeds back into the
//! integrator.

use crate::simulation::params::{TRAIL_FADE, TRAIL_MAX_LEN};
use crate::simulation::states::TrailPoint;

/// Record `position` in `trail` and age the whole history one tick.
///
/// Appends the new sample at full opacity, fades every entry (the new one
/// included) by the fixed rate, drops entries that reached zero, and caps the
/// sequence to the most recent `TRAIL_MAX_LEN`.
pub fn record(trail: &mut Vec<TrailPoint>, position: f64) {
    trail.push(TrailPoint { position, opacity: 1.0 });

    for point in trail.iter_mut() {
        point.opacity -= TRAIL_FADE;
    }
    trail.retain(|point| point.opacity > 0.0);

    if trail.len() > TRAIL_MAX_LEN {
        let excess = trail.len() - TRAIL_MAX_LEN;
        trail.drain(..excess);
    }
}
