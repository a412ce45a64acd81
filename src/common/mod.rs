pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod matrix;

pub use color::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use matrix::*;
