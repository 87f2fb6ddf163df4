use num_complex::Complex64;

use crate::core::data::grid::Grid;
use crate::core::data::view_range::ViewRange;
use crate::core::fractals::mandelbrot::errors::{Axis, MandelbrotSetError};

/// `n` evenly spaced samples from `lower` to `upper` inclusive.
#[must_use]
pub fn linspace(lower: f64, upper: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lower],
        _ => {
            let step = (upper - lower) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { upper } else { lower + step * i as f64 })
                .collect()
        }
    }
}

/// Sample points of the complex plane: `c[i, j] = real[j] + i * imag[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    real: Vec<f64>,
    imag: Vec<f64>,
    d_real: f64,
    d_imag: f64,
    c: Grid<Complex64>,
}

impl ComplexGrid {
    pub fn new(view: &ViewRange, n_real: usize, n_imag: usize) -> Result<Self, MandelbrotSetError> {
        if n_real < 2 {
            return Err(MandelbrotSetError::DimensionTooSmall {
                axis: Axis::Real,
                samples: n_real,
            });
        }

        if n_imag < 2 {
            return Err(MandelbrotSetError::DimensionTooSmall {
                axis: Axis::Imag,
                samples: n_imag,
            });
        }

        let real = linspace(view.real_lower(), view.real_upper(), n_real);
        let imag = linspace(view.imag_lower(), view.imag_upper(), n_imag);
        let d_real = real[1] - real[0];
        let d_imag = imag[1] - imag[0];
        let c = Grid::from_fn(n_imag, n_real, |row, col| Complex64::new(real[col], imag[row]));

        Ok(Self {
            real,
            imag,
            d_real,
            d_imag,
            c,
        })
    }

    #[must_use]
    pub fn n_real(&self) -> usize {
        self.real.len()
    }

    #[must_use]
    pub fn n_imag(&self) -> usize {
        self.imag.len()
    }

    #[must_use]
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    #[must_use]
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    #[must_use]
    pub fn d_real(&self) -> f64 {
        self.d_real
    }

    #[must_use]
    pub fn d_imag(&self) -> f64 {
        self.d_imag
    }

    #[must_use]
    pub fn c(&self) -> &Grid<Complex64> {
        &self.c
    }

    /// Row and column of the sample closest to `point`.
    #[must_use]
    pub fn nearest_cell(&self, point: Complex64) -> (usize, usize) {
        (nearest_index(&self.imag, point.im), nearest_index(&self.real, point.re))
    }

    /// Strips `border` samples from both ends of each axis. Spacing is kept.
    #[must_use]
    pub fn cropped(&self, border: usize) -> Self {
        Self {
            real: self.real[border..self.real.len() - border].to_vec(),
            imag: self.imag[border..self.imag.len() - border].to_vec(),
            d_real: self.d_real,
            d_imag: self.d_imag,
            c: self.c.cropped(border),
        }
    }
}

fn nearest_index(axis: &[f64], value: f64) -> usize {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewRange {
        ViewRange::new(-2.0, 1.0, -1.5, 1.5).unwrap()
    }

    #[test]
    fn test_linspace_hits_both_ends() {
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_grid_broadcasts_axes() {
        let grid = ComplexGrid::new(&view(), 4, 3).unwrap();

        assert_eq!(grid.n_real(), 4);
        assert_eq!(grid.n_imag(), 3);
        assert_eq!(grid.c().rows(), 3);
        assert_eq!(grid.c().cols(), 4);
        assert_eq!(grid.d_real(), 1.0);
        assert_eq!(grid.d_imag(), 1.5);

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.c()[(row, col)], Complex64::new(grid.real()[col], grid.imag()[row]));
            }
        }
    }

    #[test]
    fn test_dimension_below_two_is_rejected() {
        assert_eq!(
            ComplexGrid::new(&view(), 1, 5),
            Err(MandelbrotSetError::DimensionTooSmall {
                axis: Axis::Real,
                samples: 1
            })
        );
        assert_eq!(
            ComplexGrid::new(&view(), 5, 0),
            Err(MandelbrotSetError::DimensionTooSmall {
                axis: Axis::Imag,
                samples: 0
            })
        );
    }

    #[test]
    fn test_nearest_cell() {
        let grid = ComplexGrid::new(&view(), 5, 5).unwrap();

        assert_eq!(grid.nearest_cell(Complex64::new(0.0, 0.0)), (2, 3));
        assert_eq!(grid.nearest_cell(Complex64::new(2.0, 2.0)), (4, 4));
    }

    #[test]
    fn test_cropped_keeps_spacing() {
        let grid = ComplexGrid::new(&view(), 7, 5).unwrap();
        let cropped = grid.cropped(1);

        assert_eq!(cropped.n_real(), 5);
        assert_eq!(cropped.n_imag(), 3);
        assert_eq!(cropped.d_real(), grid.d_real());
        assert_eq!(cropped.real()[0], grid.real()[1]);
        assert_eq!(cropped.c()[(0, 0)], grid.c()[(1, 1)]);
    }
}
