use std::time::Instant;

use crate::simulation::controller::TrackController;
use crate::simulation::integrator::step_body;
use crate::simulation::params::{GlobalParams, MotionParams};
use crate::simulation::states::TrackBody;

const DT: f64 = 1.0 / 60.0; // one 60 Hz frame of simulation time

/// Helper to build `n` bodies with deterministically varied parameters
fn make_bodies(n: usize) -> Vec<TrackBody> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic spread, no rand needed
        let params = MotionParams {
            force: 40.0 + 30.0 * (i_f * 0.37).sin().abs(),
            mass: 2.0 + (i % 8) as f64,
            friction: 0.05 + 0.05 * (i_f * 0.13).cos().abs(),
            drag: 0.01,
            initial_velocity: 0.0,
        };
        bodies.push(TrackBody::at_start(format!("body-{i}"), String::from("ffffff"), params));
    }

    bodies
}

fn make_globals() -> GlobalParams {
    GlobalParams {
        track_length: 1000.0,
        time_scale: 1.0,
    }
}

/// Raw integrator throughput: step `n` bodies for a fixed number of frames
pub fn bench_step() {
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let steps = 60; // one simulated second per measurement

    for n in ns {
        let globals = make_globals();
        let bodies = make_bodies(n);

        // Flat kinematic state, stepped outside the controller
        let mut state: Vec<(f64, f64)> = bodies.iter().map(|b| (b.position, b.velocity)).collect();

        // Warm up
        for (i, (pos, vel)) in state.iter_mut().enumerate() {
            let out = step_body(*pos, *vel, &bodies[i].params, DT, globals.track_length);
            *pos = out.position;
            *vel = out.velocity;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            for (i, (pos, vel)) in state.iter_mut().enumerate() {
                let out = step_body(*pos, *vel, &bodies[i].params, DT, globals.track_length);
                *pos = out.position;
                *vel = out.velocity;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:8}, step = {:9.6} s", per_step);
    }
}

/// Full controller tick (integration + trails) for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,us_per_tick");

    for n in (500..=8000).step_by(500) {
        let mut controller = TrackController::new(make_globals(), make_bodies(n));
        controller.start();

        let frame_ms = 1000.0 / 60.0;
        let mut timestamp = 0.0;

        // Baseline tick, then warm up one real frame
        controller.tick(timestamp);
        timestamp += frame_ms;
        controller.tick(timestamp);

        let steps = 60;
        let t0 = Instant::now();
        for _ in 0..steps {
            timestamp += frame_ms;
            controller.tick(timestamp);
        }
        let us_per_tick = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

        println!("{},{:.3}", n, us_per_tick);
    }
}
