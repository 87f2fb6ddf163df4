mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::Cli;
pub use controllers::cli::cli_controller::CliController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::render_request::render_request::{RenderRequest, render, render_height_map};
pub use crate::core::actions::zoom_animation::ports::frame_sink::FrameSink;
pub use crate::core::actions::zoom_animation::zoom_animation::{
    AnimationReport, ZoomAnimation, ZoomAnimationError,
};
pub use crate::core::backend::escape_backend::EscapeBackend;
pub use crate::core::backend::factory::escape_backend_factory;
pub use crate::core::backend::kinds::EscapeBackendKind;
pub use crate::core::backend::orbit_cell::OrbitCell;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::grid::Grid;
pub use crate::core::data::height_map::HeightMap;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::view_range::ViewRange;
pub use crate::core::fractals::mandelbrot::complex_grid::ComplexGrid;
pub use crate::core::fractals::mandelbrot::config::MandelbrotSetConfig;
pub use crate::core::fractals::mandelbrot::errors::{Axis, MandelbrotSetError};
pub use crate::core::fractals::mandelbrot::mandelbrot_set::MandelbrotSet;
pub use crate::core::fractals::mandelbrot::palette::Palette;
pub use crate::core::fractals::mandelbrot::resample::ResampleError;
pub use presenters::file::frame_directory::FrameDirectory;
pub use presenters::file::ppm::PpmFilePresenter;
