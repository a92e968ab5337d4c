use std::fmt;

/// Width and height of a raster, displayed as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("all images must have the same dimensions [current={expected}, selected={found}]")]
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },
    #[error("{transform} takes {expected} input image(s), got {found}")]
    InputCount {
        transform: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("pixel buffer of length {len} does not match {dimensions}")]
    BufferSize { dimensions: Dimensions, len: usize },
}

pub type Result<T, E = TransformError> = std::result::Result<T, E>;
