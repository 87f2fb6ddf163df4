use num_complex::Complex64;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewRangeError {
    InvalidRealBounds { lower: f64, upper: f64 },
    InvalidImagBounds { lower: f64, upper: f64 },
}

impl fmt::Display for ViewRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRealBounds { lower, upper } => {
                write!(f, "real bounds must be finite with lower < upper: [{}, {}]", lower, upper)
            }
            Self::InvalidImagBounds { lower, upper } => {
                write!(f, "imaginary bounds must be finite with lower < upper: [{}, {}]", lower, upper)
            }
        }
    }
}

impl Error for ViewRangeError {}

fn valid_bounds(lower: f64, upper: f64) -> bool {
    lower.is_finite() && upper.is_finite() && lower < upper
}

/// Window of the complex plane currently covered by the sample grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRange {
    real_lower: f64,
    real_upper: f64,
    imag_lower: f64,
    imag_upper: f64,
}

impl ViewRange {
    pub fn new(
        real_lower: f64,
        real_upper: f64,
        imag_lower: f64,
        imag_upper: f64,
    ) -> Result<Self, ViewRangeError> {
        if !valid_bounds(real_lower, real_upper) {
            return Err(ViewRangeError::InvalidRealBounds {
                lower: real_lower,
                upper: real_upper,
            });
        }

        if !valid_bounds(imag_lower, imag_upper) {
            return Err(ViewRangeError::InvalidImagBounds {
                lower: imag_lower,
                upper: imag_upper,
            });
        }

        Ok(Self {
            real_lower,
            real_upper,
            imag_lower,
            imag_upper,
        })
    }

    #[must_use]
    pub fn real_lower(&self) -> f64 {
        self.real_lower
    }

    #[must_use]
    pub fn real_upper(&self) -> f64 {
        self.real_upper
    }

    #[must_use]
    pub fn imag_lower(&self) -> f64 {
        self.imag_lower
    }

    #[must_use]
    pub fn imag_upper(&self) -> f64 {
        self.imag_upper
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.real_upper - self.real_lower
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.imag_upper - self.imag_lower
    }

    #[must_use]
    pub fn center(&self) -> Complex64 {
        Complex64::new(
            (self.real_lower + self.real_upper) / 2.0,
            (self.imag_lower + self.imag_upper) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex64) -> bool {
        self.real_lower <= point.re
            && point.re <= self.real_upper
            && self.imag_lower <= point.im
            && point.im <= self.imag_upper
    }

    /// Pulls every side inwards: `real_by` on the real edges, `imag_by` on
    /// the imaginary edges.
    pub fn shrunk(&self, real_by: f64, imag_by: f64) -> Result<Self, ViewRangeError> {
        Self::new(
            self.real_lower + real_by,
            self.real_upper - real_by,
            self.imag_lower + imag_by,
            self.imag_upper - imag_by,
        )
    }
}
