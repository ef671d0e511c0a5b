use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::png::PngEncoder;
use image::{Delay, ExtendedColorType, Frame, ImageEncoder, Rgba, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;

use crate::anim::FrameSink;
use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};

/// Grayscale intensity of a live cell.
pub const ALIVE: u8 = 255;
/// Grayscale intensity of a dead cell.
pub const DEAD: u8 = 0;
/// Largest frame `render_frame` will allocate, in pixels.
pub const MAX_FRAME_PIXELS: usize = 1 << 26;

#[inline]
pub fn intensity(cell: Cell) -> u8 {
    match cell {
        Cell::Alive => ALIVE,
        Cell::Dead => DEAD,
    }
}

/// One byte per cell, row-major.
pub fn intensities(grid: &Grid<Cell>) -> Vec<u8> {
    grid.data.iter().map(|&c| intensity(c)).collect()
}

/// Grayscale frame with every cell drawn as a `cell_px` x `cell_px` block.
/// Returns the buffer and its pixel dimensions. Fails if the frame would
/// exceed `MAX_FRAME_PIXELS`.
pub fn render_frame(grid: &Grid<Cell>, cell_px: usize) -> Result<(Vec<u8>, usize, usize)> {
    let cells = grid.w.checked_mul(grid.h);
    if cells != Some(grid.data.len()) {
        return Err(LifeError::DataLength {
            expected: cells.unwrap_or(usize::MAX),
            actual: grid.data.len(),
        });
    }

    let px = cell_px.max(1);
    let too_large = || LifeError::FrameTooLarge {
        width: grid.w,
        height: grid.h,
        cell_px,
    };
    let w = grid.w.checked_mul(px).ok_or_else(too_large)?;
    let h = grid.h.checked_mul(px).ok_or_else(too_large)?;
    if !w.checked_mul(h).is_some_and(|n| n <= MAX_FRAME_PIXELS) {
        return Err(too_large());
    }
    let mut luma = vec![DEAD; w * h];

    luma.par_chunks_mut(w.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            let r = y / px;
            for (x, out) in row.iter_mut().enumerate() {
                *out = intensity(grid.get(r, x / px));
            }
        });

    Ok((luma, w, h))
}

/// PNG-encode a grayscale buffer.
pub fn encode_png(luma: &[u8], w: usize, h: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(luma, w as u32, h as u32, ExtendedColorType::L8)?;
    Ok(buf)
}

// `luma` is a `render_frame` buffer of exactly w * h bytes.
fn gray_to_rgba(luma: &[u8], w: usize, h: usize) -> RgbaImage {
    RgbaImage::from_fn(w as u32, h as u32, |x, y| {
        let v = luma[y as usize * w + x as usize];
        Rgba([v, v, v, 255])
    })
}

/// Writes every frame into one looping animated GIF.
pub struct GifSink {
    encoder: GifEncoder<BufWriter<File>>,
    cell_px: usize,
    delay: Delay,
    frames: usize,
}

impl GifSink {
    pub fn create(path: &Path, cell_px: usize, interval_ms: u32) -> Result<Self> {
        let file = BufWriter::new(File::create(path)?);
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite)?;
        info!("writing animation to {}", path.display());
        Ok(Self {
            encoder,
            cell_px,
            delay: Delay::from_numer_denom_ms(interval_ms, 1),
            frames: 0,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FrameSink for GifSink {
    fn frame(&mut self, generation: u64, grid: &Grid<Cell>) -> Result<()> {
        let (luma, w, h) = render_frame(grid, self.cell_px)?;
        let frame = Frame::from_parts(gray_to_rgba(&luma, w, h), 0, 0, self.delay);
        self.encoder.encode_frame(frame)?;
        self.frames += 1;
        debug!("gif frame {} (generation {})", self.frames, generation);
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, ... in a directory.
pub struct PngDirSink {
    dir: PathBuf,
    cell_px: usize,
}

impl PngDirSink {
    pub fn create(dir: &Path, cell_px: usize) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            cell_px,
        })
    }
}

impl FrameSink for PngDirSink {
    fn frame(&mut self, generation: u64, grid: &Grid<Cell>) -> Result<()> {
        let (luma, w, h) = render_frame(grid, self.cell_px)?;
        let path = self.dir.join(format!("frame_{generation:05}.png"));
        image::save_buffer(&path, &luma, w as u32, h as u32, image::ColorType::L8)?;
        debug!("saved {}", path.display());
        Ok(())
    }
}

/// In-memory PNG frames, for callers that ship images elsewhere.
#[derive(Default)]
pub struct PngFrames {
    pub cell_px: usize,
    pub frames: Vec<Vec<u8>>,
}

impl FrameSink for PngFrames {
    fn frame(&mut self, _generation: u64, grid: &Grid<Cell>) -> Result<()> {
        let (luma, w, h) = render_frame(grid, self.cell_px)?;
        self.frames.push(encode_png(&luma, w, h)?);
        Ok(())
    }
}

/// Fans each frame out to several sinks.
impl FrameSink for [Box<dyn FrameSink>] {
    fn frame(&mut self, generation: u64, grid: &Grid<Cell>) -> Result<()> {
        for sink in self.iter_mut() {
            sink.frame(generation, grid)?;
        }
        Ok(())
    }
}
