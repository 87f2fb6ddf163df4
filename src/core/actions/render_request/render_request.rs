use log::debug;
use std::time::Instant;

use crate::core::backend::factory::escape_backend_factory;
use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::data::height_map::HeightMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_range::ViewRange;
use crate::core::fractals::mandelbrot::errors::MandelbrotSetError;
use crate::core::fractals::mandelbrot::mandelbrot_set::MandelbrotSet;
use crate::core::fractals::mandelbrot::palette::Palette;

/// A single still: window bounds, output size and iteration budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewRange,
    pub resolution: Resolution,
    pub iterations: u32,
    pub backend: EscapeBackendKind,
    pub palette_seed: Option<u64>,
}

impl RenderRequest {
    fn build_set(&self) -> Result<MandelbrotSet, MandelbrotSetError> {
        let palette = match self.palette_seed {
            Some(seed) => Palette::seeded(seed),
            None => Palette::from_entropy(),
        };

        let mut set = MandelbrotSet::new(
            self.view,
            self.resolution.width(),
            self.resolution.height(),
            self.resolution,
            escape_backend_factory(self.backend),
            palette,
        )?;

        let start = Instant::now();
        set.iterate(self.iterations);
        debug!(
            "{} rounds over {} samples in {:?}",
            self.iterations,
            self.resolution,
            start.elapsed()
        );

        Ok(set)
    }
}

/// Samples the grid one cell per output pixel and colours the result.
pub fn render(request: &RenderRequest) -> Result<PixelBuffer, MandelbrotSetError> {
    request.build_set()?.get_image(request.resolution)
}

/// Same sampling as [`render`] but returns the raw escape-time field.
pub fn render_height_map(request: &RenderRequest) -> Result<HeightMap, MandelbrotSetError> {
    request.build_set()?.get_hmap(request.resolution)
}
