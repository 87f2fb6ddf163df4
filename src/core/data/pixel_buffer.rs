use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        row: usize,
        col: usize,
        resolution: Resolution,
    },
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match buffer size {}",
                    resolution_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                row,
                col,
                resolution,
            } => {
                write!(
                    f,
                    "pixel at row:{}, col:{} outside of {} image",
                    row, col, resolution
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = resolution_to_buffer_size(resolution);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.resolution.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn pixel(&self, row: usize, col: usize) -> Result<Colour, PixelBufferError> {
        let index = self.byte_index(row, col)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_index(row, col)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn byte_index(&self, row: usize, col: usize) -> Result<usize, PixelBufferError> {
        if row >= self.height() || col >= self.width() {
            return Err(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                resolution: self.resolution,
            });
        }

        Ok((row * self.width() + col) * 3)
    }
}
