pub mod color;
pub mod config;
pub mod summary;
pub mod world;

pub use color::*;
pub use config::*;
pub use summary::*;
pub use world::*;
