//! Generation driver. Owns the current grid and advances it one full step per
//! tick. Cadence comes from the caller; nothing here sleeps or loops forever.

use log::debug;

use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::step::step_into;

/// Rendering collaborator fed one grid per generation.
pub trait FrameSink {
    fn frame(&mut self, generation: u64, grid: &Grid<Cell>) -> Result<()>;
}

/// Collects frames in memory.
impl FrameSink for Vec<Grid<Cell>> {
    fn frame(&mut self, _generation: u64, grid: &Grid<Cell>) -> Result<()> {
        self.push(grid.clone());
        Ok(())
    }
}

pub struct Animation {
    current: Grid<Cell>,
    // Write target for the next step; swapped in after each tick.
    scratch: Grid<Cell>,
    generation: u64,
}

impl Animation {
    /// Validates the grid once; every later tick is infallible.
    pub fn new(grid: Grid<Cell>) -> Result<Self> {
        let n = grid.side()?;
        Ok(Self {
            current: grid,
            scratch: Grid::new(n, n),
            generation: 0,
        })
    }

    pub fn current(&self) -> &Grid<Cell> {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid<Cell> {
        self.current
    }

    /// Advance exactly one generation and return the new current grid.
    pub fn tick(&mut self) -> &Grid<Cell> {
        step_into(&self.current, &mut self.scratch)
            .expect("both buffers keep the square size validated in Animation::new");
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.current.alive_count()
        );
        &self.current
    }

    /// Tick, then hand the new grid to `sink`.
    pub fn tick_into<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.tick();
        sink.frame(self.generation, &self.current)
    }
}

/// Lazy, unbounded sequence of generations after the initial grid.
impl Iterator for Animation {
    type Item = Grid<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tick().clone())
    }
}
