//! Normal map synthesis and conversion between normal map encodings.
//!
//! # Encodings
//! - **Standard**: tangent-space normal with X in R, Y in G, Z in B, each
//!   mapped from `[-1, 1]` onto `[0, 255]`.
//! - **Red**: R fixed at 255, G and B both hold a nonlinear remap of the
//!   standard Y, and A holds the standard R with headroom at both ends.
//! - **Exported red**: the red channel layout without the remap.
//!
//! Converting back to standard rebuilds B from the unit-length invariant
//! using the two known components.

use crate::error::Result;
use crate::image::Raster;
use crate::pixel::{HALF_RANGE, Rgba, complete_unit, to_byte, to_signed};

/// Centre of the red encoding's G range.
const RED_OFFSET: f64 = 0.76;
/// Remap slope below the midpoint.
const RED_SCALE_LOW: f64 = 0.48;
/// Remap slope at and above the midpoint.
const RED_SCALE_HIGH: f64 = 0.24;
/// Slope of the standard R to red A mapping.
const ALPHA_SCALE: f64 = 0.92;
/// Offset of the standard R to red A mapping.
const ALPHA_OFFSET: f64 = 10.0;

/// Slope of the red remap for a signed standard G value.
#[inline]
pub fn encode_scale(signed: f64) -> f64 {
    if signed < 0.0 { RED_SCALE_LOW } else { RED_SCALE_HIGH }
}

/// Slope of the red remap for a red G value in `[0, 1]`.
#[inline]
pub fn decode_scale(fraction: f64) -> f64 {
    if fraction < RED_OFFSET { RED_SCALE_LOW } else { RED_SCALE_HIGH }
}

/// Build a normal map from two grayscale renders of the same surface.
///
/// `top` is lit from above and feeds G; `right` is lit from the side and feeds
/// R. Only the R channel of each input is read. Z is approximated from how far
/// the combined lighting is from fully lit:
///
/// ```text
/// out.b = round((1 − |(r + t) / 255 − 1|) × 127.5 + 127.5)
/// ```
pub fn calculate_normal_map(top: &Raster, right: &Raster) -> Result<Raster> {
    top.ensure_same_size(right)?;

    let pixels = top
        .pixels()
        .iter()
        .zip(right.pixels())
        .map(|(t, r)| synthesize_pixel(t.r, r.r))
        .collect();

    Raster::new(top.width(), top.height(), pixels)
}

#[inline]
fn synthesize_pixel(top: u8, right: u8) -> Rgba {
    let lit = (f64::from(right) + f64::from(top)) / 255.0;
    let z = (1.0 - (lit - 1.0).abs()) * HALF_RANGE + HALF_RANGE;
    Rgba::opaque(right, top, to_byte(z))
}

/// Encode one standard normal map pixel as a red normal map pixel.
///
/// ```text
/// gr    = g / 127.5 − 1
/// g'    = round((gr × (gr < 0 ? 0.48 : 0.24) + 0.76) × 255)
/// out   = (255, g', g', round(r × 0.92 + 10))
/// ```
pub fn standard_to_red_pixel(px: Rgba) -> Rgba {
    let gr = to_signed(px.g);
    let g = to_byte((gr * encode_scale(gr) + RED_OFFSET) * 255.0);
    let a = to_byte(f64::from(px.r) * ALPHA_SCALE + ALPHA_OFFSET);
    Rgba::new(255, g, g, a)
}

/// Decode one red normal map pixel back to a standard normal map pixel.
pub fn red_to_standard_pixel(px: Rgba) -> Rgba {
    let gr = f64::from(px.g) / 255.0;
    let g = to_byte(((gr - RED_OFFSET) / decode_scale(gr) + 1.0) * HALF_RANGE);
    Rgba::new(px.a, g, complete_unit(g, px.a), 255)
}

/// Repack a standard normal map pixel into the exported red layout.
#[inline]
pub fn standard_to_exported_red_pixel(px: Rgba) -> Rgba {
    Rgba::new(255, px.g, px.g, px.r)
}

/// Unpack an exported red normal map pixel into the standard layout.
#[inline]
pub fn exported_red_to_standard_pixel(px: Rgba) -> Rgba {
    Rgba::new(px.a, px.g, complete_unit(px.g, px.a), 255)
}

pub fn standard_to_red(image: &Raster) -> Raster {
    image.map(standard_to_red_pixel)
}

pub fn red_to_standard(image: &Raster) -> Raster {
    image.map(red_to_standard_pixel)
}

pub fn standard_to_exported_red(image: &Raster) -> Raster {
    image.map(standard_to_exported_red_pixel)
}

pub fn exported_red_to_standard(image: &Raster) -> Raster {
    image.map(exported_red_to_standard_pixel)
}
