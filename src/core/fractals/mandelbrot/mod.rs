pub mod complex_grid;
pub mod config;
pub mod errors;
pub mod iteration_state;
pub mod mandelbrot_set;
pub mod palette;
pub mod resample;
