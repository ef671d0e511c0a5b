use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use lifegrid::config::{InitMode, Params};
use lifegrid::render::{ALIVE, DEAD, GifSink, PngDirSink, PngFrames};
use lifegrid::{Cell, Grid};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lifegrid-{}-{}", std::process::id(), name))
}

fn glider_params(frames: usize) -> Params {
    Params {
        grid_size: 9,
        frames,
        mode: InitMode::Glider,
        cell_px: 2,
        ..Params::default()
    }
    .clamped()
}

#[test]
fn run_emits_initial_grid_plus_requested_frames() {
    let mut frames: Vec<Grid<Cell>> = Vec::new();
    let (outcome, timings) = lifegrid::run(&glider_params(4), &mut frames).unwrap();
    assert_eq!(frames.len(), 5);
    assert_eq!(outcome.generations, 4);
    assert_eq!(outcome.final_alive, 5);
    assert_eq!(outcome.seed, None);
    assert_eq!(frames[0], lifegrid::glider_grid(9, 1, 1).unwrap());
    assert!(timings.iter().any(|t| t.name == "TOTAL"));
}

#[test]
fn random_runs_report_their_seed_and_replay() {
    let params = Params {
        grid_size: 30,
        frames: 3,
        seed: Some(99),
        ..Params::default()
    };
    let mut first: Vec<Grid<Cell>> = Vec::new();
    let mut second: Vec<Grid<Cell>> = Vec::new();
    let (outcome, _) = lifegrid::run(&params, &mut first).unwrap();
    lifegrid::run(&params, &mut second).unwrap();
    assert_eq!(outcome.seed, Some(99));
    assert_eq!(first, second);
}

#[test]
fn gif_contains_one_frame_per_generation() {
    let path = scratch_path("glider.gif");
    {
        let mut sink = GifSink::create(&path, 2, 50).unwrap();
        lifegrid::run(&glider_params(7), &mut sink).unwrap();
        assert_eq!(sink.frames(), 8);
    }

    let decoder = GifDecoder::new(BufReader::new(File::open(&path).unwrap())).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 8);
    assert_eq!(frames[0].buffer().dimensions(), (18, 18));
    let (numer, denom) = frames[0].delay().numer_denom_ms();
    assert_eq!(numer / denom, 50);
    fs::remove_file(&path).ok();
}

#[test]
fn png_dir_holds_numbered_frames() {
    let dir = scratch_path("frames");
    let mut sink = PngDirSink::create(&dir, 1).unwrap();
    lifegrid::run(&glider_params(2), &mut sink).unwrap();

    for generation in 0..=2 {
        let path = dir.join(format!("frame_{generation:05}.png"));
        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (9, 9));
        assert!(img.pixels().all(|p| p.0[0] == ALIVE || p.0[0] == DEAD));
        assert_eq!(img.pixels().filter(|p| p.0[0] == ALIVE).count(), 5);
    }
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn in_memory_png_frames_match_frame_count() {
    let mut sink = PngFrames {
        cell_px: 1,
        frames: Vec::new(),
    };
    lifegrid::run(&glider_params(3), &mut sink).unwrap();
    assert_eq!(sink.frames.len(), 4);
    assert!(sink.frames.iter().all(|png| png.starts_with(b"\x89PNG")));
}
