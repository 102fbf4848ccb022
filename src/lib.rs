#[macro_use]
extern crate tracing;

pub use bytemuck;
pub use cgmath;
#[cfg(feature = "image")]
pub use image;
pub use thiserror;

pub mod engine;
pub mod support;

#[cfg(feature = "logging-initializer")]
pub mod logging;
