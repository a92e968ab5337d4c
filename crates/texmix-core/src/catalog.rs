//! Ordered transform catalog.
//!
//! Menu indices and keys are a stable contract for front ends: new transforms
//! go at the end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError};
use crate::image::Raster;
use crate::pixel::Channel;
use crate::transforms::{alpha, channels, normal};

/// Identifies one transform in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformId {
    BlackAsTransparency,
    CalculateNormalMap,
    SplitImageChannels,
    MergeImageChannels,
    StandardToRedNormal,
    RedToStandardNormal,
    StandardToExportedRedNormal,
    ExportedRedToStandardNormal,
    ClearTransparency,
}

/// One raster produced by a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Set when the transform produces one output per channel.
    pub channel: Option<Channel>,
    pub raster: Raster,
}

impl TransformOutput {
    fn single(raster: Raster) -> Vec<Self> {
        vec![Self { channel: None, raster }]
    }
}

const SINGLE_INPUT: &[&str] = &["image"];

impl TransformId {
    /// Every transform in menu order.
    pub fn all() -> &'static [Self] {
        const ALL: [TransformId; 9] = [
            TransformId::BlackAsTransparency,
            TransformId::CalculateNormalMap,
            TransformId::SplitImageChannels,
            TransformId::MergeImageChannels,
            TransformId::StandardToRedNormal,
            TransformId::RedToStandardNormal,
            TransformId::StandardToExportedRedNormal,
            TransformId::ExportedRedToStandardNormal,
            TransformId::ClearTransparency,
        ];
        &ALL
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable machine-readable name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::BlackAsTransparency => "black-as-transparency",
            Self::CalculateNormalMap => "calculate-normal-map",
            Self::SplitImageChannels => "split-image-channels",
            Self::MergeImageChannels => "merge-image-channels",
            Self::StandardToRedNormal => "standard-to-red-normal",
            Self::RedToStandardNormal => "red-to-standard-normal",
            Self::StandardToExportedRedNormal => "standard-to-exported-red-normal",
            Self::ExportedRedToStandardNormal => "exported-red-to-standard-normal",
            Self::ClearTransparency => "clear-transparency",
        }
    }

    /// Human-readable label for menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BlackAsTransparency => "black as transparency",
            Self::CalculateNormalMap => "calculate normal map",
            Self::SplitImageChannels => "split image channels",
            Self::MergeImageChannels => "merge image channels",
            Self::StandardToRedNormal => "convert standard normal map to red normal map",
            Self::RedToStandardNormal => "convert red normal map to standard normal map",
            Self::StandardToExportedRedNormal => {
                "convert standard normal map to exported red normal map"
            }
            Self::ExportedRedToStandardNormal => {
                "convert exported red normal map to standard normal map"
            }
            Self::ClearTransparency => "clear transparency",
        }
    }

    /// Role of each input, in the order [`apply`](Self::apply) expects them.
    pub const fn inputs(self) -> &'static [&'static str] {
        match self {
            Self::CalculateNormalMap => {
                &["image as lit from the top", "image as lit from the right"]
            }
            Self::MergeImageChannels => &[
                "R channel image",
                "G channel image",
                "B channel image",
                "A channel image",
            ],
            _ => SINGLE_INPUT,
        }
    }

    /// Whether every input must share the first input's dimensions.
    pub const fn requires_matching_sizes(self) -> bool {
        self.inputs().len() > 1
    }

    /// Run the transform on `inputs`, given in the order of [`inputs`](Self::inputs).
    pub fn apply(self, inputs: &[&Raster]) -> Result<Vec<TransformOutput>> {
        if let Some(first) = inputs.first() {
            tracing::debug!("running {} on {}", self.key(), first.dimensions());
        }

        let outputs = match (self, inputs) {
            (Self::BlackAsTransparency, [image]) => {
                TransformOutput::single(alpha::black_as_transparency(image))
            }
            (Self::CalculateNormalMap, [top, right]) => {
                TransformOutput::single(normal::calculate_normal_map(top, right)?)
            }
            (Self::SplitImageChannels, [image]) => channels::split_channels(image)
                .into_iter()
                .map(|(channel, raster)| TransformOutput {
                    channel: Some(channel),
                    raster,
                })
                .collect(),
            (Self::MergeImageChannels, [r, g, b, a]) => {
                TransformOutput::single(channels::merge_channels([*r, *g, *b, *a])?)
            }
            (Self::StandardToRedNormal, [image]) => {
                TransformOutput::single(normal::standard_to_red(image))
            }
            (Self::RedToStandardNormal, [image]) => {
                TransformOutput::single(normal::red_to_standard(image))
            }
            (Self::StandardToExportedRedNormal, [image]) => {
                TransformOutput::single(normal::standard_to_exported_red(image))
            }
            (Self::ExportedRedToStandardNormal, [image]) => {
                TransformOutput::single(normal::exported_red_to_standard(image))
            }
            (Self::ClearTransparency, [image]) => {
                TransformOutput::single(alpha::clear_transparency(image))
            }
            _ => {
                tracing::warn!("{} called with {} inputs", self.key(), inputs.len());
                return Err(TransformError::InputCount {
                    transform: self.key(),
                    expected: self.inputs().len(),
                    found: inputs.len(),
                });
            }
        };
        Ok(outputs)
    }
}

impl fmt::Display for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a selection matches neither an index nor a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transform: {0}")]
pub struct UnknownTransform(pub String);

impl FromStr for TransformId {
    type Err = UnknownTransform;

    /// Accepts a menu index (`"3"`), a key (`"merge-image-channels"`), or a
    /// label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(index) = needle.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| UnknownTransform(s.to_string()));
        }
        Self::all()
            .iter()
            .copied()
            .find(|id| {
                id.key().eq_ignore_ascii_case(needle) || id.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownTransform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Rgba;

    #[test]
    fn test_catalog_order_is_stable() {
        let keys: Vec<&str> = TransformId::all().iter().map(|id| id.key()).collect();
        assert_eq!(
            keys,
            vec![
                "black-as-transparency",
                "calculate-normal-map",
                "split-image-channels",
                "merge-image-channels",
                "standard-to-red-normal",
                "red-to-standard-normal",
                "standard-to-exported-red-normal",
                "exported-red-to-standard-normal",
                "clear-transparency",
            ]
        );
        for (i, id) in TransformId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(TransformId::from_index(i), Some(*id));
        }
        assert_eq!(TransformId::from_index(9), None);
    }

    #[test]
    fn test_parse_index_key_and_label() {
        assert_eq!("3".parse::<TransformId>(), Ok(TransformId::MergeImageChannels));
        assert_eq!(
            " clear-transparency ".parse::<TransformId>(),
            Ok(TransformId::ClearTransparency)
        );
        assert_eq!(
            "Calculate Normal Map".parse::<TransformId>(),
            Ok(TransformId::CalculateNormalMap)
        );
        assert!("42".parse::<TransformId>().is_err());
        assert!("sharpen".parse::<TransformId>().is_err());
    }

    #[test]
    fn test_serde_uses_keys() {
        for id in TransformId::all() {
            let json = serde_json::to_string(id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_input_arity() {
        assert_eq!(TransformId::CalculateNormalMap.inputs().len(), 2);
        assert_eq!(TransformId::MergeImageChannels.inputs().len(), 4);
        assert!(TransformId::MergeImageChannels.requires_matching_sizes());
        assert!(!TransformId::ClearTransparency.requires_matching_sizes());
    }

    #[test]
    fn test_apply_rejects_wrong_input_count() {
        let image = Raster::filled(1, 1, Rgba::WHITE);
        let err = TransformId::MergeImageChannels.apply(&[&image, &image]).unwrap_err();
        assert_eq!(
            err,
            TransformError::InputCount {
                transform: "merge-image-channels",
                expected: 4,
                found: 2,
            }
        );
    }

    #[test]
    fn test_apply_rejects_count_for_every_transform() {
        let image = Raster::filled(1, 1, Rgba::WHITE);
        for id in TransformId::all() {
            let too_many = vec![&image; id.inputs().len() + 1];
            for inputs in [&[][..], &too_many[..]] {
                let err = id.apply(inputs).unwrap_err();
                assert_eq!(
                    err,
                    TransformError::InputCount {
                        transform: id.key(),
                        expected: id.inputs().len(),
                        found: inputs.len(),
                    }
                );
            }
        }
    }

    #[test]
    fn test_apply_split_tags_channels() {
        let image = Raster::filled(2, 2, Rgba::new(1, 2, 3, 4));
        let outputs = TransformId::SplitImageChannels.apply(&[&image]).unwrap();
        let tags: Vec<Option<Channel>> = outputs.iter().map(|o| o.channel).collect();
        assert_eq!(tags, Channel::ALL.map(Some).to_vec());
    }

    #[test]
    fn test_apply_merge_mismatch_produces_nothing() {
        let small = Raster::filled(2, 2, Rgba::WHITE);
        let large = Raster::filled(3, 3, Rgba::WHITE);
        let result = TransformId::MergeImageChannels.apply(&[&small, &large, &small, &small]);
        assert!(matches!(result, Err(TransformError::DimensionMismatch { .. })));
    }
}
