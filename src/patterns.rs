use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use crate::rng::{fresh_seed, row_rng};

/// Probability that a randomly seeded cell starts alive.
pub const ALIVE_PROBABILITY: f64 = 0.1;

const D: Cell = Cell::Dead;
const A: Cell = Cell::Alive;

/// Fixed row-major template stamped onto a grid by overwrite.
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [Cell],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: 3,
    cols: 3,
    cells: &[
        D, D, A,
        A, D, A,
        D, A, A,
    ],
};

/// N x N grid, each cell independently alive with `ALIVE_PROBABILITY`.
/// Draws a fresh seed on every call.
pub fn random_grid(n: usize) -> Result<Grid<Cell>> {
    random_grid_seeded(n, fresh_seed())
}

/// Same distribution as `random_grid`, reproducible for a given seed.
pub fn random_grid_seeded(n: usize, seed: u64) -> Result<Grid<Cell>> {
    let mut grid = Grid::square(n)?;
    grid.data
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(row, cells)| {
            let mut rng = row_rng(seed, row);
            for cell in cells.iter_mut() {
                *cell = Cell::from(rng.gen_bool(ALIVE_PROBABILITY));
            }
        });
    debug!("random {}x{} grid, seed={}, alive={}", n, n, seed, grid.alive_count());
    Ok(grid)
}

/// Blank N x N grid with a glider whose top-left cell is (top_row, top_col).
pub fn glider_grid(n: usize, top_row: usize, top_col: usize) -> Result<Grid<Cell>> {
    let mut grid = Grid::square(n)?;
    stamp(&mut grid, &GLIDER, top_row, top_col)?;
    Ok(grid)
}

/// Overwrite the sub-region at (top_row, top_col) with `pattern`.
/// Fails without touching the grid if the region leaves the grid.
pub fn stamp(grid: &mut Grid<Cell>, pattern: &Pattern, top_row: usize, top_col: usize) -> Result<()> {
    let size = grid.side()?;
    let fits_rows = top_row.checked_add(pattern.rows).is_some_and(|end| end <= size);
    let fits_cols = top_col.checked_add(pattern.cols).is_some_and(|end| end <= size);
    if !fits_rows || !fits_cols {
        return Err(LifeError::PatternOutOfBounds {
            top_row,
            top_col,
            rows: pattern.rows,
            cols: pattern.cols,
            size,
        });
    }

    for (r, cells) in pattern.cells.chunks(pattern.cols).enumerate() {
        for (c, &cell) in cells.iter().enumerate() {
            grid.set(top_row + r, top_col + c, cell);
        }
    }
    debug!("stamped {} at ({}, {})", pattern.name, top_row, top_col);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_grid_places_template_at_offset() {
        let g = glider_grid(9, 1, 1).unwrap();
        assert_eq!(g.alive_cells(), vec![(1, 3), (2, 1), (2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn glider_fits_flush_against_far_edge() {
        let g = glider_grid(9, 6, 6).unwrap();
        assert_eq!(g.alive_count(), 5);
        assert!(g.get(8, 8).is_alive());
    }

    #[test]
    fn out_of_bounds_stamp_fails_and_leaves_grid_untouched() {
        let mut g = Grid::square(9).unwrap();
        let err = stamp(&mut g, &GLIDER, 7, 1).unwrap_err();
        assert!(matches!(err, LifeError::PatternOutOfBounds { top_row: 7, size: 9, .. }));
        assert!(stamp(&mut g, &GLIDER, 0, 7).is_err());
        assert!(stamp(&mut g, &GLIDER, usize::MAX, 0).is_err());
        assert_eq!(g.alive_count(), 0);
    }

    #[test]
    fn stamp_overwrites_instead_of_blending() {
        let mut g = Grid::square(9).unwrap();
        g.data.iter_mut().for_each(|c| *c = Cell::Alive);
        stamp(&mut g, &GLIDER, 0, 0).unwrap();
        assert_eq!(g.get(0, 0), Cell::Dead);
        assert_eq!(g.get(0, 2), Cell::Alive);
        assert_eq!(g.alive_count(), 81 - 4);
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert!(matches!(random_grid(0), Err(LifeError::EmptyGrid)));
        assert!(matches!(glider_grid(0, 0, 0), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn seeded_grids_repeat_and_unseeded_differ() {
        assert_eq!(random_grid_seeded(64, 3).unwrap(), random_grid_seeded(64, 3).unwrap());
        assert_ne!(random_grid_seeded(64, 3).unwrap(), random_grid_seeded(64, 4).unwrap());
        assert_ne!(random_grid(64).unwrap(), random_grid(64).unwrap());
    }

    #[test]
    fn random_fill_is_close_to_one_in_ten() {
        let n = 200;
        let trials = 10;
        let total: usize = (0..trials)
            .map(|seed| random_grid_seeded(n, seed).unwrap().alive_count())
            .sum();
        let fraction = total as f64 / (trials as usize * n * n) as f64;
        assert!((fraction - ALIVE_PROBABILITY).abs() < 0.005, "fraction={fraction}");
    }
}
