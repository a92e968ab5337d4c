//! Pixel transforms — transparency, channel split/merge, and normal maps.

pub mod alpha;
pub mod channels;
pub mod normal;

pub use alpha::{black_as_transparency, clear_transparency};
pub use channels::{extract_channel, merge_channels, split_channels};
pub use normal::{
    calculate_normal_map, exported_red_to_standard, red_to_standard, standard_to_exported_red,
    standard_to_red,
};
