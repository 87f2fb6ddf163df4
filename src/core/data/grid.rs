use std::error::Error;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    SizeMismatch { rows: usize, cols: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { rows, cols, len } => {
                write!(f, "grid of {}x{} cannot hold {} cells", rows, cols, len)
            }
        }
    }
}

impl Error for GridError {}

/// Row-major 2D array. Row `i`, column `j` lives at `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }

        Self { rows, cols, cells }
    }

    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows * cols != cells.len() {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.flat_index(row, col)])
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Copy with `border` rows and columns stripped from every edge.
    ///
    /// Callers must ensure `2 * border` is smaller than both dimensions.
    #[must_use]
    pub fn cropped(&self, border: usize) -> Self {
        let rows = self.rows - 2 * border;
        let cols = self.cols - 2 * border;
        let mut cells = Vec::with_capacity(rows * cols);

        for row in border..self.rows - border {
            let start = self.flat_index(row, border);
            cells.extend_from_slice(&self.cells[start..start + cols]);
        }

        Self { rows, cols, cells }
    }

    /// Upsamples to `(2 * rows - 1) x (2 * cols - 1)`.
    ///
    /// Existing cells land on even rows and even columns; every other
    /// position is seeded with `fill`.
    #[must_use]
    pub fn interleaved(&self, fill: T) -> Self {
        let rows = upsampled_len(self.rows);
        let cols = upsampled_len(self.cols);

        Self::from_fn(rows, cols, |row, col| {
            if is_inserted_cell(row, col) {
                fill
            } else {
                self.cells[self.flat_index(row / 2, col / 2)]
            }
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({}, {}) out of bounds for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

#[must_use]
pub fn upsampled_len(len: usize) -> usize {
    if len == 0 { 0 } else { 2 * len - 1 }
}

/// True for positions created by [`Grid::interleaved`], false for the
/// even-stride positions that hold pre-existing cells.
#[must_use]
pub fn is_inserted_cell(row: usize, col: usize) -> bool {
    row % 2 == 1 || col % 2 == 1
}
