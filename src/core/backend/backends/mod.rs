pub mod parallel_rayon;
pub mod serial;
