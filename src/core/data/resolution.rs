use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    Empty { width: usize, height: usize },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Output or floor size, `width` along the real axis and `height` along
/// the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    pub fn new(width: usize, height: usize) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::Empty { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_rejects_zero_dimensions() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::Empty {
                width: 0,
                height: 10
            })
        );
        assert!(Resolution::new(10, 0).is_err());
    }

    #[test]
    fn test_resolution_size_and_display() {
        let resolution = Resolution::new(800, 600).unwrap();

        assert_eq!(resolution.size(), 480_000);
        assert_eq!(resolution.to_string(), "800x600");
    }
}
