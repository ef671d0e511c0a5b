//! B3/S23 generation step on a torus.

use rayon::prelude::*;

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid, neighbors8_torus};

/// Live cells among the 8 toroidal neighbors of (row, col).
#[inline]
pub fn count_neighbors(grid: &Grid<Cell>, row: usize, col: usize) -> u8 {
    neighbors8_torus(row, col, grid.w)
        .filter(|&(r, c)| grid.get(r, c).is_alive())
        .count() as u8
}

/// Next state of one cell. Exactly 3 means alive, fewer than 2 or more
/// than 3 means dead, and 2 keeps the current state.
#[inline]
pub fn next_state(current: Cell, count: u8) -> Cell {
    if count == 3 {
        Cell::Alive
    } else if !(2..=3).contains(&count) {
        Cell::Dead
    } else {
        current
    }
}

/// Compute the next generation as a new grid. The input is not modified.
pub fn step(grid: &Grid<Cell>) -> Result<Grid<Cell>> {
    let n = grid.side()?;
    let mut next = Grid::new(n, n);
    fill_next(grid, &mut next, n);
    Ok(next)
}

/// Compute the next generation of `src` into `dst`.
/// `src` is only read; every cell of `dst` is overwritten.
pub fn step_into(src: &Grid<Cell>, dst: &mut Grid<Cell>) -> Result<()> {
    let n = src.side()?;
    if dst.w != n || dst.h != n {
        return Err(LifeError::SizeMismatch {
            expected: n,
            width: dst.w,
            height: dst.h,
        });
    }
    if dst.data.len() != n * n {
        return Err(LifeError::DataLength {
            expected: n * n,
            actual: dst.data.len(),
        });
    }
    fill_next(src, dst, n);
    Ok(())
}

fn fill_next(src: &Grid<Cell>, dst: &mut Grid<Cell>, n: usize) {
    dst.data
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = next_state(src.get(row, col), count_neighbors(src, row, col));
            }
        });
}
