pub mod actions;
pub mod backend;
pub mod data;
pub mod fractals;
