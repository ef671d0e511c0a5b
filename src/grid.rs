use crate::error::{LifeError, Result};

/// State of a single cell. Only two states exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Row-major flat grid. No per-cell objects.
/// Indexed as (row, col); simulation grids are square and wrap on both axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    /// N x N grid of default cells. Fails for N == 0.
    pub fn square(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(LifeError::EmptyGrid);
        }
        Ok(Self::new(n, n))
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        if h == 0 || w == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let mut data = Vec::with_capacity(w * h);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != w {
                return Err(LifeError::RaggedRows {
                    row,
                    expected: w,
                    actual: cells.len(),
                });
            }
            data.extend(cells);
        }
        Ok(Self { data, w, h })
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.h && col < self.w);
        row * self.w + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: T) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    /// Side length of a square, non-empty grid whose storage matches its
    /// dimensions.
    pub fn side(&self) -> Result<usize> {
        if self.w == 0 || self.h == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let expected = self.w.checked_mul(self.h).unwrap_or(usize::MAX);
        if self.data.len() != expected {
            return Err(LifeError::DataLength {
                expected,
                actual: self.data.len(),
            });
        }
        if self.w != self.h {
            return Err(LifeError::NotSquare {
                width: self.w,
                height: self.h,
            });
        }
        Ok(self.w)
    }
}

impl Grid<Cell> {
    pub fn alive_count(&self) -> usize {
        self.data.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i / self.w, i % self.w))
            .collect()
    }
}

/// Wrap a signed (row, col) onto an n x n torus.
#[inline]
pub fn wrap_torus(row: isize, col: isize, n: usize) -> (usize, usize) {
    let n = n as isize;
    (row.rem_euclid(n) as usize, col.rem_euclid(n) as usize)
}

/// 8-connected neighbors with wrapping on both axes.
pub fn neighbors8_torus(row: usize, col: usize, n: usize) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(isize, isize); 8] = [
        (-1, -1), (-1, 0), (-1, 1),
        (0, -1),           (0, 1),
        (1, -1),  (1, 0),  (1, 1),
    ];
    offsets
        .into_iter()
        .map(move |(dr, dc)| wrap_torus(row as isize + dr, col as isize + dc, n))
}
