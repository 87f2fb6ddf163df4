use std::error::Error;
use std::fmt;

use crate::core::data::grid::Grid;
use crate::core::data::height_map::HeightMap;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::complex_grid::linspace;

/// Sample positions stay this far inside the outermost grid cells.
pub const SAMPLE_INSET: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum ResampleError {
    OutOfBounds {
        row: f64,
        col: f64,
        rows: usize,
        cols: usize,
    },
    EmptyField {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "sample at row:{}, col:{} is outside the {}x{} field",
                    row, col, rows, cols
                )
            }
            Self::EmptyField { rows, cols } => {
                write!(f, "cannot interpolate over a {}x{} field", rows, cols)
            }
        }
    }
}

impl Error for ResampleError {}

/// Bilinear interpolation over a field indexed by integer grid coordinates.
/// Coordinates outside `[0, rows - 1] x [0, cols - 1]` are rejected.
#[derive(Debug)]
pub struct GridInterpolator<'a> {
    field: &'a Grid<u32>,
}

impl<'a> GridInterpolator<'a> {
    pub fn new(field: &'a Grid<u32>) -> Result<Self, ResampleError> {
        if field.rows() < 2 || field.cols() < 2 {
            return Err(ResampleError::EmptyField {
                rows: field.rows(),
                cols: field.cols(),
            });
        }

        Ok(Self { field })
    }

    pub fn sample(&self, row: f64, col: f64) -> Result<f64, ResampleError> {
        let max_row = (self.field.rows() - 1) as f64;
        let max_col = (self.field.cols() - 1) as f64;

        if !(0.0..=max_row).contains(&row) || !(0.0..=max_col).contains(&col) {
            return Err(ResampleError::OutOfBounds {
                row,
                col,
                rows: self.field.rows(),
                cols: self.field.cols(),
            });
        }

        // the last cell interpolates from its left/upper neighbour with t = 1
        let r0 = (row.floor() as usize).min(self.field.rows() - 2);
        let c0 = (col.floor() as usize).min(self.field.cols() - 2);
        let tr = row - r0 as f64;
        let tc = col - c0 as f64;

        let at = |r: usize, c: usize| f64::from(self.field[(r, c)]);
        let top = at(r0, c0) + tc * (at(r0, c0 + 1) - at(r0, c0));
        let bottom = at(r0 + 1, c0) + tc * (at(r0 + 1, c0 + 1) - at(r0 + 1, c0));

        Ok(top + tr * (bottom - top))
    }

    /// Samples a `resolution` lattice spanning `SAMPLE_INSET` to
    /// `N - 1 - SAMPLE_INSET` on each axis.
    pub fn resample(&self, resolution: Resolution) -> Result<HeightMap, ResampleError> {
        let rows = sample_positions(self.field.rows(), resolution.height());
        let cols = sample_positions(self.field.cols(), resolution.width());
        let mut values = Vec::with_capacity(resolution.size());

        for &row in &rows {
            for &col in &cols {
                values.push(self.sample(row, col)?);
            }
        }

        Ok(HeightMap::from_values(resolution, values))
    }
}

#[must_use]
pub fn sample_positions(cells: usize, count: usize) -> Vec<f64> {
    linspace(SAMPLE_INSET, cells as f64 - 1.0 - SAMPLE_INSET, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_field() -> Grid<u32> {
        // value = 10 * row + col
        Grid::from_fn(3, 4, |row, col| (10 * row + col) as u32)
    }

    #[test]
    fn test_sample_at_grid_points_is_exact() {
        let field = ramp_field();
        let interp = GridInterpolator::new(&field).unwrap();

        assert_eq!(interp.sample(0.0, 0.0).unwrap(), 0.0);
        assert_eq!(interp.sample(1.0, 2.0).unwrap(), 12.0);
        assert_eq!(interp.sample(2.0, 3.0).unwrap(), 23.0);
    }

    #[test]
    fn test_sample_is_bilinear() {
        let field = ramp_field();
        let interp = GridInterpolator::new(&field).unwrap();

        assert!((interp.sample(0.5, 0.5).unwrap() - 5.5).abs() < 1e-12);
        assert!((interp.sample(1.25, 2.75).unwrap() - 15.25).abs() < 1e-12);
    }

    #[test]
    fn test_sample_outside_field_is_an_error() {
        let field = ramp_field();
        let interp = GridInterpolator::new(&field).unwrap();

        assert_eq!(
            interp.sample(2.01, 0.0),
            Err(ResampleError::OutOfBounds {
                row: 2.01,
                col: 0.0,
                rows: 3,
                cols: 4
            })
        );
        assert!(interp.sample(0.0, -0.001).is_err());
        assert!(interp.sample(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_field_is_rejected() {
        let field = Grid::filled(1, 4, 0u32);

        assert!(matches!(
            GridInterpolator::new(&field),
            Err(ResampleError::EmptyField { rows: 1, cols: 4 })
        ));
    }

    #[test]
    fn test_sample_positions_are_inset() {
        let positions = sample_positions(5, 3);

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], SAMPLE_INSET);
        assert_eq!(positions[2], 4.0 - SAMPLE_INSET);
    }

    #[test]
    fn test_resample_shape_and_range() {
        let field = ramp_field();
        let interp = GridInterpolator::new(&field).unwrap();

        let map = interp.resample(Resolution::new(7, 5).unwrap()).unwrap();

        assert_eq!(map.width(), 7);
        assert_eq!(map.height(), 5);
        assert!(map.values().iter().all(|&v| (0.0..=23.0).contains(&v)));
        assert!(map.get(0, 0).unwrap() < map.get(4, 6).unwrap());
    }
}
