use log::info;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::zoom_animation::ports::frame_sink::FrameSink;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_range::ViewRange;
use crate::core::fractals::mandelbrot::errors::MandelbrotSetError;
use crate::core::fractals::mandelbrot::mandelbrot_set::MandelbrotSet;

const DEFAULT_WARMUP_ITERATIONS: u32 = 100;
const DEFAULT_ITERATIONS_PER_FRAME: u32 = 10;
const DEFAULT_FRAMES: usize = 500;
const DEFAULT_BORDER: usize = 15;
const DEFAULT_FRAME_SIZE: usize = 800;

#[derive(Debug)]
pub enum ZoomAnimationError {
    Cancelled(Cancelled),
    Engine(MandelbrotSetError),
    Sink(Box<dyn Error>),
}

impl fmt::Display for ZoomAnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Engine(err) => write!(f, "engine error: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl Error for ZoomAnimationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Engine(err) => Some(err),
            Self::Sink(err) => Some(err.as_ref()),
        }
    }
}

impl From<MandelbrotSetError> for ZoomAnimationError {
    fn from(err: MandelbrotSetError) -> Self {
        Self::Engine(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationReport {
    pub frames: usize,
    pub final_shape: (usize, usize),
    pub final_view: ViewRange,
    pub n_iterations: u64,
}

/// Drives `iterate -> get_image -> zoom` once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    pub warmup_iterations: u32,
    pub iterations_per_frame: u32,
    pub frames: usize,
    /// Cells cropped from each edge between frames.
    pub border: usize,
    pub frame_resolution: Resolution,
}

impl Default for ZoomAnimation {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            iterations_per_frame: DEFAULT_ITERATIONS_PER_FRAME,
            frames: DEFAULT_FRAMES,
            border: DEFAULT_BORDER,
            frame_resolution: Resolution::new(DEFAULT_FRAME_SIZE, DEFAULT_FRAME_SIZE)
                .expect("default frame resolution is valid"),
        }
    }
}

impl ZoomAnimation {
    /// Renders `frames` frames into `sink`. `cancel` is polled before each
    /// frame; a cancelled run keeps the frames already delivered.
    pub fn run<S, C>(
        &self,
        set: &mut MandelbrotSet,
        sink: &mut S,
        cancel: &C,
    ) -> Result<AnimationReport, ZoomAnimationError>
    where
        S: FrameSink + ?Sized,
        C: CancelToken,
    {
        set.iterate(self.warmup_iterations);

        for frame_index in 0..self.frames {
            if cancel.is_cancelled() {
                info!("animation cancelled after {} frames", frame_index);
                return Err(ZoomAnimationError::Cancelled(Cancelled));
            }

            let start = Instant::now();
            set.iterate(self.iterations_per_frame);
            let frame = set.get_image(self.frame_resolution)?;
            sink.accept(frame_index, &frame)
                .map_err(ZoomAnimationError::Sink)?;
            set.zoom(self.border)?;

            let (n_real, n_imag) = set.shape();
            info!(
                "frame {}/{}: grid {}x{}, {} active cells, {:?}",
                frame_index + 1,
                self.frames,
                n_real,
                n_imag,
                set.active_cell_count(),
                start.elapsed()
            );
        }

        Ok(AnimationReport {
            frames: self.frames,
            final_shape: set.shape(),
            final_view: set.view_range(),
            n_iterations: set.n_iterations(),
        })
    }
}
