use std::error::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Consumer of rendered animation frames, e.g. an encoder or a file writer.
pub trait FrameSink {
    fn accept(&mut self, frame_index: usize, frame: &PixelBuffer) -> Result<(), Box<dyn Error>>;
}
