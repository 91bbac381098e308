//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! a [`TrackController`] holding global parameters and every body parked at
//! the start gate. Validation happens here, before any value reaches the
//! core.
//!
//! The bundle is inserted into Bevy as a `Resource` and consumed by the
//! physics-tick and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig};
use crate::simulation::controller::TrackController;
use crate::simulation::params::{GlobalParams, MotionParams};
use crate::simulation::states::TrackBody;

/// Bevy resource wrapping the controller that owns all simulation state
///
/// In Bevy terms the single physics system takes `ResMut<Scenario>` and every
/// reader takes `Res<Scenario>`; the scheduler serializes them, so readers
/// always observe a complete tick.
#[derive(Resource)]
pub struct Scenario {
    pub controller: TrackController,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `TrackBody` at the start gate
        let bodies: Vec<TrackBody> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                TrackBody::at_start(
                    bc.name.clone(),
                    bc.color.clone(),
                    MotionParams {
                        force: bc.force,
                        mass: bc.mass,
                        friction: bc.friction,
                        drag: bc.drag,
                        initial_velocity: bc.initial_velocity,
                    },
                )
            })
            .collect();

        let globals = GlobalParams {
            track_length: cfg.globals.track_length,
            time_scale: cfg.globals.time_scale,
        };

        Ok(Self {
            controller: TrackController::new(globals, bodies),
        })
    }
}
