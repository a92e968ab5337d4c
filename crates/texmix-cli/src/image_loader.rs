//! PNG loading and saving for the console front end.

use std::path::{Path, PathBuf};

use texmix_core::Raster;

/// Load an image from disk and convert it to an 8-bit RGBA raster.
///
/// Any format the `image` crate decodes is accepted; palette, gray and
/// 16-bit sources are expanded to RGBA-8 first.
pub fn load_raster(path: &Path) -> Result<Raster, ImageLoadError> {
    let img = image::open(path).map_err(|source| ImageLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let raster = Raster::from_rgba_image(&img.to_rgba8());
    tracing::info!("loaded {} ({})", path.display(), raster.dimensions());
    Ok(raster)
}

/// Encode `raster` as PNG at `path`.
pub fn save_raster(raster: Raster, path: &Path) -> Result<(), ImageLoadError> {
    raster
        .into_rgba_image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ImageLoadError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("saved {}", path.display());
    Ok(())
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}
