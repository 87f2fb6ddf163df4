pub mod frame_directory;
pub mod ppm;
