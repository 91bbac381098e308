//! Core state types for the track simulation.
//!
//! Defines the runtime body/system structs:
//! - `TrailPoint` fading position sample consumed by the viewer
//! - `TrackBody` one body on the track with its parameter snapshot
//! - `TrackSystem` the collection of bodies and the elapsed sim time `t`

use crate::simulation::params::MotionParams;

#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub position: f64, // sampled position (m)
    pub opacity: f64,  // fades toward 0, always in (0, 1] while retained
}

#[derive(Debug, Clone)]
pub struct TrackBody {
    pub name: String,          // stable identity, also shown by the viewer
    pub color: String,         // hex color for visualization ("ff69b4")
    pub position: f64,         // distance from the start gate (m)
    pub velocity: f64,         // signed speed along the track (m/s)
    pub acceleration: f64,     // signed (m/s^2)
    pub params: MotionParams,  // per-body settings, frozen during a run
    pub trail: Vec<TrailPoint>, // recent positions, most-recent last
    pub finished: bool,        // reached the far end of the track
}

impl TrackBody {
    /// Fresh body at the start gate with its configured launch velocity
    pub fn at_start(name: String, color: String, params: MotionParams) -> Self {
        Self {
            name,
            color,
            position: 0.0,
            velocity: params.initial_velocity,
            acceleration: 0.0,
            params,
            trail: Vec::new(),
            finished: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackSystem {
    pub bodies: Vec<TrackBody>, // ordered collection of bodies (config order)
    pub t: f64,                 // accumulated simulation time (s)
}
