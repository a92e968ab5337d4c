//! Channel split and merge.
//!
//! Splitting expands each channel to an opaque gray image. Merging reads the
//! grayscale projection of four images back into one, so `merge(split(x))`
//! reproduces `x`.

use crate::error::Result;
use crate::image::Raster;
use crate::pixel::{Channel, Rgba};

/// Extract one channel as an opaque grayscale raster.
pub fn extract_channel(image: &Raster, channel: Channel) -> Raster {
    image.map(|px| Rgba::gray(px.channel(channel)))
}

/// Split an image into four grayscale rasters, ordered R, G, B, A.
pub fn split_channels(image: &Raster) -> [(Channel, Raster); 4] {
    Channel::ALL.map(|channel| (channel, extract_channel(image, channel)))
}

/// Merge four images into one, reading the grayscale projection of each.
///
/// Inputs map to `[R, G, B, A]` in order. All four must match the size of the
/// first; otherwise nothing is produced.
pub fn merge_channels(sources: [&Raster; 4]) -> Result<Raster> {
    let [r, g, b, a] = sources;
    for other in [g, b, a] {
        r.ensure_same_size(other)?;
    }

    let pixels = r
        .pixels()
        .iter()
        .zip(g.pixels())
        .zip(b.pixels())
        .zip(a.pixels())
        .map(|(((pr, pg), pb), pa)| {
            Rgba::new(pr.grayscale(), pg.grayscale(), pb.grayscale(), pa.grayscale())
        })
        .collect();

    Raster::new(r.width(), r.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Dimensions, TransformError};

    fn sample() -> Raster {
        let pixels = (0..12u8)
            .map(|i| Rgba::new(i * 20, 255 - i * 7, i * 3 + 1, 100 + i))
            .collect();
        Raster::new(4, 3, pixels).unwrap()
    }

    #[test]
    fn test_split_order_and_values() {
        let image = Raster::filled(1, 1, Rgba::new(10, 20, 30, 40));
        let parts = split_channels(&image);
        let channels: Vec<Channel> = parts.iter().map(|(c, _)| *c).collect();
        assert_eq!(channels, Channel::ALL.to_vec());
        assert_eq!(parts[0].1.pixels(), &[Rgba::gray(10)]);
        assert_eq!(parts[1].1.pixels(), &[Rgba::gray(20)]);
        assert_eq!(parts[2].1.pixels(), &[Rgba::gray(30)]);
        assert_eq!(parts[3].1.pixels(), &[Rgba::gray(40)]);
    }

    #[test]
    fn test_merge_uses_truncating_grayscale() {
        let r = Raster::filled(1, 1, Rgba::opaque(1, 1, 2));
        let g = Raster::filled(1, 1, Rgba::opaque(255, 0, 0));
        let b = Raster::filled(1, 1, Rgba::opaque(200, 100, 50));
        let a = Raster::filled(1, 1, Rgba::new(9, 9, 9, 0));
        let out = merge_channels([&r, &g, &b, &a]).unwrap();
        assert_eq!(out.pixels(), &[Rgba::new(1, 85, 116, 9)]);
    }

    #[test]
    fn test_merge_of_split_restores_image() {
        let image = sample();
        let [(_, r), (_, g), (_, b), (_, a)] = split_channels(&image);
        let merged = merge_channels([&r, &g, &b, &a]).unwrap();
        assert_eq!(merged, image);
    }

    #[test]
    fn test_merge_rejects_mismatched_dimensions() {
        let small = Raster::filled(2, 2, Rgba::WHITE);
        let large = Raster::filled(3, 3, Rgba::WHITE);
        let err = merge_channels([&small, &small, &large, &small]).unwrap_err();
        assert_eq!(
            err,
            TransformError::DimensionMismatch {
                expected: Dimensions { width: 2, height: 2 },
                found: Dimensions { width: 3, height: 3 },
            }
        );
    }
}
