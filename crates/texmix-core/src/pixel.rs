//! Pixel value type and the shared per-pixel helpers used by every transform.
//!
//! All float math runs in `f64`. Converting back to a byte always goes through
//! [`to_byte`], which rounds half to even and clamps to `[0, 255]`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Midpoint of the byte range, used to map `[0, 255]` onto `[-1, 1]`.
pub const HALF_RANGE: f64 = 127.5;

/// One channel of an RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
    /// Alpha.
    A,
}

impl Channel {
    /// All channels in pixel order.
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Single-letter name, used for output file suffixes and prompts.
    pub const fn letter(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// 8-bit RGBA pixel.
///
/// Layout matches an `image::RgbaImage` byte buffer, so a raw buffer can be
/// reinterpreted as `&[Rgba]` with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque gray pixel with all color channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::opaque(v, v, v)
    }

    #[inline]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
            Channel::A => self.a,
        }
    }

    /// Grayscale projection: `(r + g + b) / 3`, truncated.
    #[inline]
    pub const fn grayscale(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Brightest of the three color channels.
    #[inline]
    pub fn max_rgb(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        [px.r, px.g, px.b, px.a]
    }
}

/// Round to the nearest integer (ties to even) and clamp into a byte.
///
/// NaN maps to 0.
#[inline]
pub fn to_byte(v: f64) -> u8 {
    // `as` saturates and sends NaN to 0.
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Map a byte onto `[-1, 1]`.
#[inline]
pub fn to_signed(v: u8) -> f64 {
    f64::from(v) / HALF_RANGE - 1.0
}

/// Reconstruct the remaining component of a unit vector from two known ones.
///
/// `x` and `y` are byte-encoded components in `[-1, 1]`. The result is the
/// non-negative third component, byte-encoded the same way. Lossy encodings can
/// push `x² + y²` past 1; the radicand is clamped to zero in that case.
#[inline]
pub fn complete_unit(x: u8, y: u8) -> u8 {
    let sx = to_signed(x);
    let sy = to_signed(y);
    let z = (1.0 - sx * sx - sy * sy).max(0.0).sqrt();
    to_byte(z * HALF_RANGE + HALF_RANGE)
}
