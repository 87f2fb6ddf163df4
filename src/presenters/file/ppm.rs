use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::height_map::HeightMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary RGB (`P6`) with a max value of 255.
pub fn encode_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

/// Binary grayscale (`P5`), min-max normalised.
pub fn encode_pgm(map: &HeightMap, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "P5")?;
    writeln!(out, "{} {}", map.width(), map.height())?;
    writeln!(out, "255")?;
    out.write_all(&map.to_grayscale())
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        encode_ppm(buffer, &mut file)?;
        file.flush()
    }

    fn present_height_map(&self, map: &HeightMap, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        encode_pgm(map, &mut file)?;
        file.flush()
    }

    fn frame_extension(&self) -> &str {
        "ppm"
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_ppm_header_and_payload() {
        let mut buffer = PixelBuffer::new(Resolution::new(2, 1).unwrap());
        buffer.set_pixel(0, 1, Colour { r: 7, g: 8, b: 9 }).unwrap();
        let mut out = Vec::new();

        encode_ppm(&buffer, &mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 0, 0, 7, 8, 9]);
    }

    #[test]
    fn test_pgm_is_normalised() {
        let map = HeightMap::from_values(Resolution::new(2, 2).unwrap(), vec![1.0, 2.0, 3.0, 5.0]);
        let mut out = Vec::new();

        encode_pgm(&map, &mut out).unwrap();

        let header = b"P5\n2 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 63, 127, 255]);
    }
}
