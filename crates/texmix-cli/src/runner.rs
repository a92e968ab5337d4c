//! Acquire inputs, run one transform, persist the outputs.

use std::path::{Path, PathBuf};

use texmix_core::{Raster, TransformId};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::image_loader::{load_raster, save_raster};
use crate::source::PathSource;

/// Run `id` with paths from `source` and return the files written.
///
/// Inputs are loaded one at a time in catalog order. For multi-input
/// transforms each input is checked against the first as soon as it is
/// loaded, so a mismatch stops before the remaining inputs are requested.
/// On any failure everything loaded so far is dropped and nothing is written.
pub fn run(
    id: TransformId,
    source: &mut dyn PathSource,
    config: &AppConfig,
) -> Result<Vec<PathBuf>, CliError> {
    let mut inputs: Vec<(PathBuf, Raster)> = Vec::with_capacity(id.inputs().len());
    for role in id.inputs() {
        let path = source
            .input(role)?
            .ok_or_else(|| CliError::MissingInput((*role).to_string()))?;
        let raster = load_raster(&path)?;
        if id.requires_matching_sizes() {
            if let Some((_, first)) = inputs.first() {
                first.ensure_same_size(&raster)?;
            }
        }
        inputs.push((path, raster));
    }

    let rasters: Vec<&Raster> = inputs.iter().map(|(_, raster)| raster).collect();
    let outputs = id.apply(&rasters)?;
    let Some((first_path, _)) = inputs.first() else {
        return Ok(Vec::new());
    };

    let out_dir = config.output_dir.as_deref();
    let mut planned = Vec::with_capacity(outputs.len());
    for output in outputs {
        let target = match output.channel {
            Some(channel) => derive_output_path(first_path, channel.letter(), out_dir),
            None => {
                let suggested = derive_output_path(first_path, id.key(), out_dir);
                match source.output(&suggested)? {
                    Some(path) => path,
                    None => {
                        tracing::warn!("no output path chosen, {} result discarded", id.key());
                        continue;
                    }
                }
            }
        };
        planned.push((target, output.raster));
    }

    // Every target is checked before the first write so a run saves all of
    // its outputs or none of them.
    for (target, _) in &planned {
        prepare_target(target)?;
    }

    let mut written = Vec::with_capacity(planned.len());
    for (target, raster) in planned {
        if let Err(e) = save_raster(raster, &target) {
            discard(&written);
            return Err(e.into());
        }
        written.push(target);
    }
    Ok(written)
}

/// Create the parent directory of `target` and reject targets that are
/// existing directories.
fn prepare_target(target: &Path) -> Result<(), CliError> {
    if target.is_dir() {
        return Err(CliError::OutputIsDirectory(target.to_path_buf()));
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Remove outputs of a run that failed part way.
fn discard(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!("could not remove partial output {}: {e}", path.display());
        }
    }
}

/// `<dir>/<stem>_<suffix>.png`, where `dir` defaults to the input's directory.
pub fn derive_output_path(input: &Path, suffix: &str, dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let dir = dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    dir.join(format!("{stem}_{suffix}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ArgQueue;
    use texmix_core::Rgba;
    use texmix_core::TransformError;

    fn config() -> AppConfig {
        AppConfig {
            log_filter: "info".to_string(),
            output_dir: None,
            dialog: false,
        }
    }

    fn write_png(dir: &Path, name: &str, raster: Raster) -> PathBuf {
        let path = dir.join(name);
        save_raster(raster, &path).unwrap();
        path
    }

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("tex/wall.png"), "R", None),
            PathBuf::from("tex/wall_R.png")
        );
        assert_eq!(
            derive_output_path(
                Path::new("wall.png"),
                "clear-transparency",
                Some(Path::new("out"))
            ),
            PathBuf::from("out/wall_clear-transparency.png")
        );
    }

    #[test]
    fn test_split_writes_four_channel_files() {
        let dir = tempfile::tempdir().unwrap();
        let image = Raster::filled(2, 2, Rgba::new(10, 20, 30, 40));
        let input = write_png(dir.path(), "wall.png", image);
        let mut queue = ArgQueue::new(vec![input], None);

        let written = run(TransformId::SplitImageChannels, &mut queue, &config()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["wall_R.png", "wall_G.png", "wall_B.png", "wall_A.png"]);
        assert_eq!(load_raster(&written[3]).unwrap().get(0, 0), Some(Rgba::gray(40)));
    }

    #[test]
    fn test_single_output_uses_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let image = Raster::filled(1, 1, Rgba::new(200, 100, 50, 255));
        let input = write_png(dir.path(), "in.png", image);
        let target = dir.path().join("mask.png");
        let mut queue = ArgQueue::new(vec![input], Some(target.clone()));

        let written = run(TransformId::BlackAsTransparency, &mut queue, &config()).unwrap();
        assert_eq!(written, vec![target.clone()]);
        assert_eq!(
            load_raster(&target).unwrap().get(0, 0),
            Some(Rgba::new(255, 255, 255, 200))
        );
    }

    #[test]
    fn test_output_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "n.png", Raster::filled(1, 1, Rgba::new(5, 6, 7, 8)));
        let mut cfg = config();
        cfg.output_dir = Some(dir.path().join("nested/out"));
        let mut queue = ArgQueue::new(vec![input], None);

        let written = run(TransformId::ClearTransparency, &mut queue, &cfg).unwrap();
        assert_eq!(written, vec![dir.path().join("nested/out/n_clear-transparency.png")]);
        assert!(written[0].exists());
    }

    #[test]
    fn test_merge_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let small = write_png(dir.path(), "small.png", Raster::filled(2, 2, Rgba::WHITE));
        let large = write_png(dir.path(), "large.png", Raster::filled(3, 3, Rgba::WHITE));
        let target = dir.path().join("merged.png");
        let mut queue = ArgQueue::new(
            vec![small.clone(), large, small.clone(), small],
            Some(target.clone()),
        );

        let err = run(TransformId::MergeImageChannels, &mut queue, &config()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Transform(TransformError::DimensionMismatch { .. })
        ));
        // The mismatch is caught on the second input; the rest are never requested.
        assert_eq!(queue.remaining(), 2);
        assert!(!target.exists());
    }

    #[test]
    fn test_missing_input_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let top = write_png(dir.path(), "top.png", Raster::filled(1, 1, Rgba::WHITE));
        let mut queue = ArgQueue::new(vec![top], None);

        let err = run(TransformId::CalculateNormalMap, &mut queue, &config()).unwrap_err();
        assert!(matches!(err, CliError::MissingInput(role) if role.contains("right")));
        assert!(!dir.path().join("top_calculate-normal-map.png").exists());
    }

    #[test]
    fn test_split_blocked_target_writes_no_channels() {
        let dir = tempfile::tempdir().unwrap();
        let image = Raster::filled(2, 2, Rgba::new(10, 20, 30, 40));
        let input = write_png(dir.path(), "wall.png", image);
        std::fs::create_dir(dir.path().join("wall_B.png")).unwrap();
        let mut queue = ArgQueue::new(vec![input], None);

        let err = run(TransformId::SplitImageChannels, &mut queue, &config()).unwrap_err();
        assert!(matches!(err, CliError::OutputIsDirectory(path) if path.ends_with("wall_B.png")));
        for letter in ["R", "G", "A"] {
            assert!(!dir.path().join(format!("wall_{letter}.png")).exists());
        }
    }

    #[test]
    fn test_discard_removes_written_files() {
        let dir = tempfile::tempdir().unwrap();
        let kept = write_png(dir.path(), "a.png", Raster::filled(1, 1, Rgba::WHITE));
        let gone = dir.path().join("never-written.png");
        discard(&[kept.clone(), gone]);
        assert!(!kept.exists());
    }
}
