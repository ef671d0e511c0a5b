pub mod anim;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod rng;
pub mod step;

use std::time::Instant;

use log::info;

use anim::{Animation, FrameSink};
use config::{GLIDER_OFFSET, InitMode, Params};
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid};
pub use patterns::{glider_grid, random_grid, random_grid_seeded};
pub use step::step;

/// Summary of a finished run.
pub struct Outcome {
    /// Seed used for random mode, so the run can be repeated.
    pub seed: Option<u64>,
    pub generations: u64,
    pub final_alive: usize,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Build the first generation for `params`, returning the seed actually used
/// in random mode.
pub fn initial_grid(params: &Params) -> Result<(Grid<Cell>, Option<u64>)> {
    match params.mode {
        InitMode::Glider => {
            let (row, col) = GLIDER_OFFSET;
            Ok((glider_grid(params.grid_size, row, col)?, None))
        }
        InitMode::Random => {
            let seed = params.seed.unwrap_or_else(rng::fresh_seed);
            Ok((random_grid_seeded(params.grid_size, seed)?, Some(seed)))
        }
    }
}

/// Seed a grid, emit it as generation 0, then emit `params.frames` further
/// generations to `sink`. `params` is used as given; callers clamp first.
pub fn run<S: FrameSink + ?Sized>(params: &Params, sink: &mut S) -> Result<(Outcome, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let (grid, seed) = initial_grid(params)?;
    let mut anim = Animation::new(grid)?;
    timings.push(Timing {
        name: "seed",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    sink.frame(anim.generation(), anim.current())?;
    for _ in 0..params.frames {
        anim.tick_into(sink)?;
    }
    timings.push(Timing {
        name: "simulate+render",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let outcome = Outcome {
        seed,
        generations: anim.generation(),
        final_alive: anim.current().alive_count(),
    };
    info!(
        "{}x{} {:?} run: {} generations, {} alive at end",
        params.grid_size, params.grid_size, params.mode, outcome.generations, outcome.final_alive
    );

    Ok((outcome, timings))
}
