#![deny(bare_trait_objects)]

pub mod error;
pub mod math;
pub mod geometry;
pub mod scene;
pub mod image;
pub mod render;
pub mod ppm;
pub mod logging;

pub use error::{Error, Result};
