use rayon::prelude::*;

use crate::core::backend::escape_backend::EscapeBackend;
use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::backend::orbit_cell::OrbitCell;

/// Below this many cells per task the scheduling overhead outweighs the
/// arithmetic.
pub const MIN_CELLS_PER_TASK: usize = 1024;

/// Splits each round across rayon's work-stealing pool.
#[derive(Debug, Default)]
pub struct RayonBackend {}

impl EscapeBackend for RayonBackend {
    fn kind(&self) -> EscapeBackendKind {
        EscapeBackendKind::Rayon
    }

    fn advance(&self, cells: &mut [OrbitCell]) {
        cells
            .par_iter_mut()
            .with_min_len(MIN_CELLS_PER_TASK)
            .for_each(OrbitCell::advance);
    }
}

impl RayonBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::backends::serial::SerialBackend;
    use num_complex::Complex64;

    fn cells(count: usize) -> Vec<OrbitCell> {
        (0..count)
            .map(|index| {
                let t = index as f64 / count as f64;
                OrbitCell::seed(index, Complex64::new(-2.0 + 2.5 * t, 1.2 * t - 0.6))
            })
            .collect()
    }

    #[test]
    fn test_rayon_matches_serial() {
        let mut serial_cells = cells(5000);
        let mut rayon_cells = serial_cells.clone();

        for _ in 0..40 {
            SerialBackend::new().advance(&mut serial_cells);
            RayonBackend::new().advance(&mut rayon_cells);
        }

        assert_eq!(rayon_cells, serial_cells);
    }

    #[test]
    fn test_rayon_handles_empty_batch() {
        let mut empty: Vec<OrbitCell> = Vec::new();

        RayonBackend::new().advance(&mut empty);

        assert!(empty.is_empty());
    }
}
