pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{TrailPoint, TrackBody, TrackSystem};
pub use simulation::params::{MotionParams, GlobalParams};
pub use simulation::forces::net_force;
pub use simulation::integrator::{step_body, StepOutcome};
pub use simulation::clock::SimulationClock;
pub use simulation::controller::{SimStatus, TrackController};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ConfigError, GlobalConfig, ScenarioConfig};

pub use visualization::track_vis::run_track;

pub use benchmark::benchmark::{bench_step, bench_tick_curve};
