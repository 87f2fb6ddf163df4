use num_complex::Complex64;

use crate::core::backend::orbit_cell::OrbitCell;
use crate::core::data::grid::{Grid, is_inserted_cell};

/// Per-cell orbit state, laid out like the sample grid it belongs to.
///
/// `active` mirrors the true entries of `active_mask` as flat indices so an
/// iteration round only touches cells that can still change.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationState {
    z: Grid<Complex64>,
    active_mask: Grid<bool>,
    escape_time: Grid<u32>,
    active: Vec<usize>,
}

impl IterationState {
    #[must_use]
    pub fn fresh(rows: usize, cols: usize) -> Self {
        Self {
            z: Grid::filled(rows, cols, Complex64::new(0.0, 0.0)),
            active_mask: Grid::filled(rows, cols, true),
            escape_time: Grid::filled(rows, cols, 0),
            active: (0..rows * cols).collect(),
        }
    }

    #[must_use]
    pub fn z(&self) -> &Grid<Complex64> {
        &self.z
    }

    #[must_use]
    pub fn active_mask(&self) -> &Grid<bool> {
        &self.active_mask
    }

    #[must_use]
    pub fn escape_time(&self) -> &Grid<u32> {
        &self.escape_time
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Working copies of every active cell, in grid order.
    #[must_use]
    pub fn active_cells(&self, c: &Grid<Complex64>) -> Vec<OrbitCell> {
        self.active
            .iter()
            .map(|&index| self.orbit_cell(index, c))
            .collect()
    }

    /// Working copies of the cells created by the last [`Self::interleaved`].
    #[must_use]
    pub fn inserted_cells(&self, c: &Grid<Complex64>) -> Vec<OrbitCell> {
        let cols = self.z.cols();

        (0..self.z.len())
            .filter(|&index| is_inserted_cell(index / cols, index % cols))
            .map(|index| self.orbit_cell(index, c))
            .collect()
    }

    fn orbit_cell(&self, index: usize, c: &Grid<Complex64>) -> OrbitCell {
        OrbitCell {
            index,
            c: c.as_slice()[index],
            z: self.z.as_slice()[index],
            escape_time: self.escape_time.as_slice()[index],
            active: self.active_mask.as_slice()[index],
        }
    }

    /// Copies a working cell back into the grids.
    pub fn store(&mut self, cell: &OrbitCell) {
        self.z.as_mut_slice()[cell.index] = cell.z;
        self.active_mask.as_mut_slice()[cell.index] = cell.active;
        self.escape_time.as_mut_slice()[cell.index] = cell.escape_time;
    }

    /// Replaces the active index list; `indices` must be exactly the cells
    /// whose mask is still true.
    pub fn set_active(&mut self, indices: Vec<usize>) {
        self.active = indices;
    }

    pub fn rebuild_active(&mut self) {
        self.active = self
            .active_mask
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(index, &active)| active.then_some(index))
            .collect();
    }

    #[must_use]
    pub fn cropped(&self, border: usize) -> Self {
        let mut state = Self {
            z: self.z.cropped(border),
            active_mask: self.active_mask.cropped(border),
            escape_time: self.escape_time.cropped(border),
            active: Vec::new(),
        };
        state.rebuild_active();
        state
    }

    /// Upsampled copy. Inserted cells start from the construction seed
    /// (`z = 0`, active, no escape time).
    #[must_use]
    pub fn interleaved(&self) -> Self {
        let mut state = Self {
            z: self.z.interleaved(Complex64::new(0.0, 0.0)),
            active_mask: self.active_mask.interleaved(true),
            escape_time: self.escape_time.interleaved(0),
            active: Vec::new(),
        };
        state.rebuild_active();
        state
    }
}
