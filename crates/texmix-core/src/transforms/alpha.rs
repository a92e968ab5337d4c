//! Transparency operations.

use crate::image::Raster;
use crate::pixel::Rgba;

/// Turn black into transparency.
///
/// Every output pixel is white, with alpha taken from the brightest of the
/// source's three color channels:
///
/// ```text
/// out = (255, 255, 255, max(r, g, b))
/// ```
pub fn black_as_transparency(image: &Raster) -> Raster {
    image.map(|px| Rgba::new(255, 255, 255, px.max_rgb()))
}

/// Make every pixel fully opaque, leaving color untouched.
pub fn clear_transparency(image: &Raster) -> Raster {
    image.map(|px| Rgba { a: 255, ..px })
}
