pub mod backends;
pub mod escape_backend;
pub mod factory;
pub mod kinds;
pub mod orbit_cell;
