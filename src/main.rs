use std::path::PathBuf;

use clap::Parser;
use log::info;

use lifegrid::anim::FrameSink;
use lifegrid::config::{InitMode, Params};
use lifegrid::render::{GifSink, PngDirSink};

/// Runs Conway's Game of Life on a wrapping grid and exports the frames.
#[derive(Parser, Debug)]
#[command(name = "lifegrid", version, about)]
struct Args {
    /// Grid side length (at least 9)
    #[arg(long = "grid-size", default_value_t = 100)]
    grid_size: usize,

    /// Milliseconds between frames (at least 50)
    #[arg(long, default_value_t = 50)]
    interval: u32,

    /// Start from a single glider instead of a random fill
    #[arg(long)]
    glider: bool,

    /// Generations to run after the initial grid
    #[arg(long, default_value_t = 50)]
    frames: usize,

    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,

    /// Pixels per cell edge in exported images
    #[arg(long = "cell-px", default_value_t = 4)]
    cell_px: usize,

    /// Write an animated GIF here
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Write numbered PNG frames into this directory
    #[arg(long = "png-dir")]
    png_dir: Option<PathBuf>,
}

impl Args {
    fn params(&self) -> Params {
        Params {
            grid_size: self.grid_size,
            interval_ms: self.interval,
            frames: self.frames,
            mode: if self.glider { InitMode::Glider } else { InitMode::Random },
            seed: self.seed,
            cell_px: self.cell_px,
        }
        .clamped()
    }
}

fn main() -> Result<(), lifegrid::LifeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.params();

    let mut sinks: Vec<Box<dyn FrameSink>> = Vec::new();
    if let Some(path) = &args.gif {
        sinks.push(Box::new(GifSink::create(path, params.cell_px, params.interval_ms)?));
    }
    if let Some(dir) = &args.png_dir {
        sinks.push(Box::new(PngDirSink::create(dir, params.cell_px)?));
    }
    if sinks.is_empty() {
        info!("no --gif or --png-dir given; simulating without export");
    }

    info!(
        "{}x{} grid, {:?} start, {} frames at {} ms",
        params.grid_size, params.grid_size, params.mode, params.frames, params.interval_ms
    );

    let (outcome, timings) = lifegrid::run(&params, sinks.as_mut_slice())?;
    drop(sinks);

    if let Some(seed) = outcome.seed {
        eprintln!("seed: {}", seed);
    }
    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }
    eprintln!(
        "\n{} generations, {} cells alive",
        outcome.generations, outcome.final_alive
    );

    Ok(())
}
