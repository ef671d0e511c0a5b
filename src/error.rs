use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised while building, stepping, or exporting grids.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid must have at least one cell")]
    EmptyGrid,
    #[error("grid must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid holds {actual} cells, expected {expected} for its dimensions")]
    DataLength { expected: usize, actual: usize },
    #[error("destination grid is {width}x{height}, expected {expected}x{expected}")]
    SizeMismatch {
        expected: usize,
        width: usize,
        height: usize,
    },
    #[error("{width}x{height} grid at {cell_px} px per cell is too large to render")]
    FrameTooLarge {
        width: usize,
        height: usize,
        cell_px: usize,
    },
    #[error(
        "{rows}x{cols} pattern at ({top_row}, {top_col}) does not fit a {size}x{size} grid"
    )]
    PatternOutOfBounds {
        top_row: usize,
        top_col: usize,
        rows: usize,
        cols: usize,
        size: usize,
    },
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LifeError {
    /// True for errors caused by bad caller input rather than I/O.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, LifeError::Image(_) | LifeError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_argument_errors() {
        assert!(LifeError::EmptyGrid.is_invalid_argument());
        assert!(LifeError::NotSquare { width: 3, height: 4 }.is_invalid_argument());
        let io = LifeError::from(std::io::Error::other("disk full"));
        assert!(!io.is_invalid_argument());
    }

    #[test]
    fn size_mismatch_reports_both_destination_sides() {
        let err = LifeError::SizeMismatch {
            expected: 5,
            width: 5,
            height: 4,
        };
        assert_eq!(err.to_string(), "destination grid is 5x4, expected 5x5");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn messages_name_the_offending_sizes() {
        let err = LifeError::PatternOutOfBounds {
            top_row: 8,
            top_col: 1,
            rows: 3,
            cols: 3,
            size: 9,
        };
        assert_eq!(
            err.to_string(),
            "3x3 pattern at (8, 1) does not fit a 9x9 grid"
        );
    }
}
