pub mod driver;
pub mod geometry;
pub mod pool;
pub mod rng;
pub mod time;
