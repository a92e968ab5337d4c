//! texmix core — pixel transforms for preparing texture assets.
//!
//! Channel split/merge, transparency masking, and conversion between standard
//! and red-channel normal map encodings. Every transform borrows its inputs and
//! returns freshly allocated rasters. No file or UI dependencies.

pub mod catalog;
pub mod error;
pub mod image;
pub mod pixel;
pub mod transforms;

// Re-exports for convenience.
pub use catalog::{TransformId, TransformOutput, UnknownTransform};
pub use error::{Dimensions, Result, TransformError};
pub use image::Raster;
pub use pixel::{Channel, Rgba};
