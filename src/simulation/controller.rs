//! Simulation controller and state machine
//!
//! `TrackController` owns everything mutable: the global parameters, the
//! body array, the clock, and the run status. Each host frame calls `tick`
//! with a wall-clock timestamp; the controller derives dt, integrates every
//! unfinished body, records trails, accumulates elapsed time, and checks
//! whether the whole field has finished. Readers (the viewer, tests) only
//! ever see the state through shared borrows between ticks, so a tick is
//! always observed as one atomic snapshot.

use crate::configuration::config::{check_body_values, check_time_scale, check_track_length, ConfigError};
use crate::simulation::clock::SimulationClock;
use crate::simulation::integrator::step_body;
use crate::simulation::params::{GlobalParams, MotionParams};
use crate::simulation::states::{TrackBody, TrackSystem};
use crate::simulation::trail;

/// Run status of the whole simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStatus {
    Idle,     // configurable, bodies parked at the start gate
    Running,  // integrating every frame
    Paused,   // frozen mid-run, resumable
    Finished, // every body reached the end of the track
}

pub struct TrackController {
    globals: GlobalParams,
    system: TrackSystem,
    clock: SimulationClock,
    status: SimStatus,
}

impl TrackController {
    pub fn new(globals: GlobalParams, bodies: Vec<TrackBody>) -> Self {
        Self {
            globals,
            system: TrackSystem { bodies, t: 0.0 },
            clock: SimulationClock::new(),
            status: SimStatus::Idle,
        }
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    /// Accumulated simulation time (s)
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    /// Read-only snapshot of the bodies, in stable config order
    pub fn bodies(&self) -> &[TrackBody] {
        &self.system.bodies
    }

    pub fn globals(&self) -> &GlobalParams {
        &self.globals
    }

    // =====================================================================
    // Commands
    // =====================================================================

    /// IDLE -> RUNNING; no-op in any other state
    pub fn start(&mut self) {
        if self.status == SimStatus::Idle {
            self.clock.clear();
            self.status = SimStatus::Running;
        }
    }

    /// RUNNING -> PAUSED; no-op in any other state
    pub fn pause(&mut self) {
        if self.status == SimStatus::Running {
            self.clock.clear();
            self.status = SimStatus::Paused;
        }
    }

    /// PAUSED -> RUNNING; the clock baseline is re-established on the next tick
    pub fn resume(&mut self) {
        if self.status == SimStatus::Paused {
            self.clock.clear();
            self.status = SimStatus::Running;
        }
    }

    /// Single play/pause control: IDLE and PAUSED run, RUNNING pauses,
    /// FINISHED resets the field and runs again
    pub fn toggle(&mut self) {
        match self.status {
            SimStatus::Idle => self.start(),
            SimStatus::Paused => self.resume(),
            SimStatus::Running => self.pause(),
            SimStatus::Finished => {
                self.reset();
                self.start();
            }
        }
    }

    /// Any state -> IDLE: every body back to the start gate with its
    /// configured launch velocity, trails cleared, elapsed time zeroed
    pub fn reset(&mut self) {
        for body in &mut self.system.bodies {
            *body = TrackBody::at_start(body.name.clone(), body.color.clone(), body.params.clone());
        }
        self.system.t = 0.0;
        self.clock.clear();
        self.status = SimStatus::Idle;
    }

    // =====================================================================
    // Configuration edits (mutation policy)
    // =====================================================================

    /// Replace one body's parameters. Only while IDLE: changing the physics
    /// of an in-flight run would break determinism of its history.
    pub fn set_body_params(&mut self, index: usize, params: MotionParams) -> Result<(), ConfigError> {
        if self.status != SimStatus::Idle {
            return Err(ConfigError::SimulationActive("body parameters"));
        }
        check_body_values(params.force, params.mass, params.friction, params.drag, params.initial_velocity)?;
        let body = self
            .system
            .bodies
            .get_mut(index)
            .ok_or(ConfigError::UnknownBody(index))?;
        // Re-park the body so the idle snapshot reflects the new launch velocity
        *body = TrackBody::at_start(body.name.clone(), body.color.clone(), params);
        Ok(())
    }

    /// Set the shared track length. Only while IDLE.
    pub fn set_track_length(&mut self, track_length: f64) -> Result<(), ConfigError> {
        if self.status != SimStatus::Idle {
            return Err(ConfigError::SimulationActive("track length"));
        }
        check_track_length(track_length)?;
        self.globals.track_length = track_length;
        Ok(())
    }

    /// Set the time scale. Allowed in any state: it only stretches future dt
    /// and never rewrites history.
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<(), ConfigError> {
        check_time_scale(time_scale)?;
        self.globals.time_scale = time_scale;
        Ok(())
    }

    /// Restore the calibrated default parameters for every body and the
    /// globals. Only while IDLE.
    pub fn restore_defaults(&mut self) -> Result<(), ConfigError> {
        if self.status != SimStatus::Idle {
            return Err(ConfigError::SimulationActive("default settings"));
        }
        self.globals = GlobalParams::default();
        for body in &mut self.system.bodies {
            *body = TrackBody::at_start(body.name.clone(), body.color.clone(), MotionParams::default());
        }
        Ok(())
    }

    // =====================================================================
    // Tick
    // =====================================================================

    /// Advance the simulation by one host frame at `timestamp_ms`.
    ///
    /// Outside RUNNING this only drops the clock baseline, so the next
    /// running tick starts with a no-op baseline step instead of a catch-up
    /// dt. A baseline tick (dt = 0) leaves the snapshot untouched.
    pub fn tick(&mut self, timestamp_ms: f64) {
        if self.status != SimStatus::Running {
            self.clock.clear();
            return;
        }

        let dt = self.clock.advance(timestamp_ms, self.globals.time_scale);
        if dt == 0.0 {
            return;
        }

        for body in &mut self.system.bodies {
            if body.finished {
                continue;
            }
            let out = step_body(body.position, body.velocity, &body.params, dt, self.globals.track_length);
            body.position = out.position;
            body.velocity = out.velocity;
            body.acceleration = out.acceleration;
            body.finished = out.finished;
            trail::record(&mut body.trail, out.position);
        }

        self.system.t += dt;

        if self.system.bodies.iter().all(|b| b.finished) {
            self.status = SimStatus::Finished;
        }
    }
}
