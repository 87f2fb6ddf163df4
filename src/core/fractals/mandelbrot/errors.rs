use std::{error::Error, fmt};

use crate::core::data::resolution::ResolutionError;
use crate::core::data::view_range::ViewRangeError;
use crate::core::fractals::mandelbrot::palette::PaletteError;
use crate::core::fractals::mandelbrot::resample::ResampleError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imag,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Imag => f.write_str("imaginary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MandelbrotSetError {
    ViewRange(ViewRangeError),
    Resolution(ResolutionError),
    DimensionTooSmall {
        axis: Axis,
        samples: usize,
    },
    CropTooLarge {
        border: usize,
        n_real: usize,
        n_imag: usize,
    },
    Resample(ResampleError),
    Palette(PaletteError),
}

impl fmt::Display for MandelbrotSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewRange(err) => write!(f, "invalid view range: {}", err),
            Self::Resolution(err) => write!(f, "invalid resolution: {}", err),
            Self::DimensionTooSmall { axis, samples } => {
                write!(
                    f,
                    "{} axis needs at least 2 samples to define a spacing, got {}",
                    axis, samples
                )
            }
            Self::CropTooLarge {
                border,
                n_real,
                n_imag,
            } => {
                write!(
                    f,
                    "cannot crop {} cells from each edge of a {}x{} grid",
                    border, n_real, n_imag
                )
            }
            Self::Resample(err) => write!(f, "resample error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl Error for MandelbrotSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ViewRange(err) => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Resample(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::DimensionTooSmall { .. } | Self::CropTooLarge { .. } => None,
        }
    }
}

impl From<ViewRangeError> for MandelbrotSetError {
    fn from(err: ViewRangeError) -> Self {
        Self::ViewRange(err)
    }
}

impl From<ResolutionError> for MandelbrotSetError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ResampleError> for MandelbrotSetError {
    fn from(err: ResampleError) -> Self {
        Self::Resample(err)
    }
}

impl From<PaletteError> for MandelbrotSetError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_too_large_message() {
        let err = MandelbrotSetError::CropTooLarge {
            border: 3,
            n_real: 6,
            n_imag: 9,
        };

        assert_eq!(err.to_string(), "cannot crop 3 cells from each edge of a 6x9 grid");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_wrapped_errors_expose_source() {
        let err = MandelbrotSetError::from(ResolutionError::Empty {
            width: 0,
            height: 1,
        });

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid resolution: resolution must be at least 1x1: 0x1"
        );
    }
}
