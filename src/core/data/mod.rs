pub mod colour;
pub mod grid;
pub mod height_map;
pub mod pixel_buffer;
pub mod resolution;
pub mod view_range;
