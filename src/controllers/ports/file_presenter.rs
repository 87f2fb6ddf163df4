use std::path::Path;

use crate::core::data::height_map::HeightMap;
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    fn present_height_map(&self, map: &HeightMap, filepath: &Path) -> std::io::Result<()>;

    /// Extension used for colour frames, without the dot.
    fn frame_extension(&self) -> &str;
}
