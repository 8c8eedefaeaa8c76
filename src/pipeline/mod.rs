//! Asset generation run.
//!
//! # Flow
//!
//! ```text
//! for each source (sequential):
//!   missing?  -> warn, SourceOutcome::Missing
//!   IconSet   -> load -> remove background -> master_transparent.png
//!                       ├─ icon_transparent: fit on transparent canvas
//!                       └─ icon_filled:      compose on theme color
//!   Cover     -> load -> cover resize + center crop per output spec
//!   error?    -> log, SourceOutcome::Failed, continue
//! ```
//!
//! Only failing to create the output tree aborts the run.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

pub use report::{RunReport, SourceOutcome, SourceReport};

use crate::config::{
    AssetConfig, BACKGROUND_COLOR, MASTER_FILE, OutputSpec, SOURCES, SourceAsset, SourcePipeline,
    SpecCategory,
};
use crate::image::{
    AssetError, BackgroundRemover, compose_filled, cover_resize_crop, fit_transparent, load_rgba,
    save_png,
};
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Generate every output for every source.
pub fn run(config: &AssetConfig, remover: BackgroundRemover) -> Result<RunReport> {
    prepare_output_dirs(config)?;

    let mut report = RunReport::new(remover.is_available());
    for source in SOURCES {
        report.push(process_source(config, source, remover));
    }
    Ok(report)
}

/// Create the output root and every per-source directory.
fn prepare_output_dirs(config: &AssetConfig) -> Result<()> {
    for dir in config.output_dirs() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory `{}`", dir.display()))?;
    }
    Ok(())
}

/// Run one source through its pipeline, isolating its failures.
fn process_source(
    config: &AssetConfig,
    source: &SourceAsset,
    remover: BackgroundRemover,
) -> SourceReport {
    let path = config.source_path(source);
    let outcome = if path.exists() {
        log!(source.name; "processing {}", source.file);
        let output_dir = config.source_output_dir(source);
        let result = match source.pipeline {
            SourcePipeline::IconSet => generate_icon_set(source.name, &path, &output_dir, remover),
            SourcePipeline::Cover(category) => {
                generate_covers(source.name, &path, &output_dir, category)
            }
        };

        match result {
            Ok(outputs) => SourceOutcome::Completed { outputs },
            Err(error) => {
                log!("error"; "failed to process {}: {}", path.display(), error.detail());
                SourceOutcome::Failed { error }
            }
        }
    } else {
        log!("warn"; "source file not found: {}", config.relative(&path).display());
        SourceOutcome::Missing
    };

    SourceReport {
        name: source.name,
        path,
        outcome,
    }
}

/// Cleaned master, transparent icons and filled icons for one icon source.
pub fn generate_icon_set(
    label: &str,
    path: &Path,
    output_dir: &Path,
    remover: BackgroundRemover,
) -> Result<Vec<PathBuf>, AssetError> {
    let source = load_rgba(path)?;
    let cleaned = remover.remove(source);

    let mut outputs = Vec::new();
    let master = output_dir.join(MASTER_FILE);
    save_png(&cleaned, &master)?;
    debug!(label; "saved {} ({}x{})", MASTER_FILE, cleaned.width(), cleaned.height());
    outputs.push(master);

    let transparent = SpecCategory::IconTransparent;
    let filled = SpecCategory::IconFilled;
    let progress = ProgressLine::new(
        label,
        &[
            ("transparent", transparent.specs().len()),
            ("filled", filled.specs().len()),
        ],
    );

    for spec in transparent.specs() {
        let icon = fit_transparent(&cleaned, spec.size());
        outputs.push(write_output(&icon, output_dir, spec, transparent)?);
        progress.inc("transparent");
    }

    for spec in filled.specs() {
        let icon = compose_filled(&cleaned, spec.size(), BACKGROUND_COLOR);
        outputs.push(write_output(&icon, output_dir, spec, filled)?);
        progress.inc("filled");
    }

    progress.finish();
    Ok(outputs)
}

/// Cover-resized outputs of one category, straight from the source.
pub fn generate_covers(
    label: &str,
    path: &Path,
    output_dir: &Path,
    category: SpecCategory,
) -> Result<Vec<PathBuf>, AssetError> {
    let source = load_rgba(path)?;
    let specs = category.specs();
    let progress = ProgressLine::new(label, &[(category.as_str(), specs.len())]);

    let mut outputs = Vec::with_capacity(specs.len());
    for spec in specs {
        let resized = cover_resize_crop(&source, spec.size());
        outputs.push(write_output(&resized, output_dir, spec, category)?);
        progress.inc(category.as_str());
    }

    progress.finish();
    Ok(outputs)
}

fn write_output(
    img: &RgbaImage,
    output_dir: &Path,
    spec: &OutputSpec,
    category: SpecCategory,
) -> Result<PathBuf, AssetError> {
    let path = output_dir.join(spec.file);
    save_png(img, &path)?;
    debug!(category.as_str(); "generated {} ({}x{})", spec.file, spec.width, spec.height);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;

    use super::*;

    const ICON_FILES: [&str; 7] = [
        MASTER_FILE,
        "pwa_icon_512.png",
        "pwa_icon_192.png",
        "favicon.png",
        "apple-touch-icon.png",
        "play_store_icon.png",
        "capacitor_icon.png",
    ];

    /// White backdrop with a colored square in the middle, like a generated icon.
    fn icon_source(size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
        for y in size / 4..size * 3 / 4 {
            for x in size / 4..size * 3 / 4 {
                img.put_pixel(x, y, Rgba([220, 40, 40, 255]));
            }
        }
        img
    }

    fn project() -> (TempDir, AssetConfig) {
        let dir = TempDir::new().unwrap();
        let config = AssetConfig::from_root(dir.path());
        fs::create_dir_all(&config.assets_dir).unwrap();
        (dir, config)
    }

    fn write_source(config: &AssetConfig, name: &str, img: &RgbaImage) {
        let source = SOURCES.iter().find(|s| s.name == name).unwrap();
        img.save(config.source_path(source)).unwrap();
    }

    fn dims(path: &Path) -> (u32, u32) {
        image::image_dimensions(path).unwrap()
    }

    #[test]
    fn test_icon_set_outputs_and_sizes() {
        let (_dir, config) = project();
        write_source(&config, "Option1", &icon_source(600));

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        let out = config.output_dir.join("Option1");
        for file in ICON_FILES {
            assert!(out.join(file).is_file(), "missing {file}");
        }
        assert_eq!(dims(&out.join(MASTER_FILE)), (600, 600));
        assert_eq!(dims(&out.join("pwa_icon_512.png")), (512, 512));
        assert_eq!(dims(&out.join("favicon.png")), (64, 64));
        assert_eq!(dims(&out.join("apple-touch-icon.png")), (180, 180));
        assert_eq!(dims(&out.join("capacitor_icon.png")), (1024, 1024));

        assert!(matches!(
            &report.get("Option1").unwrap().outcome,
            SourceOutcome::Completed { outputs } if outputs.len() == ICON_FILES.len()
        ));
        assert_eq!(report.missing_count(), 3);
    }

    #[test]
    fn test_missing_feature_graphic_is_skipped() {
        let (_dir, config) = project();
        write_source(&config, "Option2", &icon_source(64));

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        let common = config.output_dir.join("Common");
        assert!(common.is_dir());
        assert!(!common.join("feature_graphic.png").exists());
        assert!(matches!(
            report.get("Feature").unwrap().outcome,
            SourceOutcome::Missing
        ));
        assert_eq!(report.completed_count(), 1);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_feature_graphic_cover() {
        let (_dir, config) = project();
        write_source(
            &config,
            "Feature",
            &RgbaImage::from_pixel(1000, 500, Rgba([30, 60, 90, 255])),
        );

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        let feature = config.output_dir.join("Common/feature_graphic.png");
        assert_eq!(dims(&feature), (1024, 500));
        let img = load_rgba(&feature).unwrap();
        assert!(img.pixels().all(|p| p[3] == 255));
        assert_eq!(report.completed_count(), 1);
    }

    #[test]
    fn test_corrupt_source_does_not_stop_run() {
        let (_dir, config) = project();
        fs::write(config.assets_dir.join("Generated_icon_1.png"), b"not an image").unwrap();
        write_source(&config, "Option2", &icon_source(64));

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        match &report.get("Option1").unwrap().outcome {
            SourceOutcome::Failed { error } => {
                assert!(matches!(error, AssetError::Decode(..)));
                assert!(error.detail().contains("Generated_icon_1.png"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(matches!(
            report.get("Option2").unwrap().outcome,
            SourceOutcome::Completed { .. }
        ));
        assert!(config.output_dir.join("Option2/favicon.png").is_file());
    }

    #[test]
    fn test_filled_icon_without_background_removal() {
        let (_dir, config) = project();
        write_source(&config, "Option1", &icon_source(100));

        run(&config, BackgroundRemover::Identity).unwrap();

        let filled = load_rgba(&config.output_dir.join("Option1/play_store_icon.png")).unwrap();
        assert!(filled.pixels().all(|p| p[3] == 255));
        // 100x100 source centered at offset 206: its white backdrop is kept.
        assert_eq!(*filled.get_pixel(210, 210), Rgba([255, 255, 255, 255]));
        assert_eq!(*filled.get_pixel(256, 256), Rgba([220, 40, 40, 255]));
        assert_eq!(*filled.get_pixel(10, 10), BACKGROUND_COLOR);
    }

    #[cfg(feature = "background-removal")]
    #[test]
    fn test_filled_icon_with_background_removal() {
        let (_dir, config) = project();
        write_source(&config, "Option1", &icon_source(100));

        let report = run(&config, BackgroundRemover::EdgeFlood).unwrap();
        assert!(report.background_removed);

        let out = config.output_dir.join("Option1");
        let master = load_rgba(&out.join(MASTER_FILE)).unwrap();
        assert_eq!(master.get_pixel(0, 0)[3], 0);
        assert_eq!(master.get_pixel(50, 50)[3], 255);

        let filled = load_rgba(&out.join("play_store_icon.png")).unwrap();
        assert!(filled.pixels().all(|p| p[3] == 255));
        // The removed white backdrop now shows the theme color.
        assert_eq!(*filled.get_pixel(210, 210), BACKGROUND_COLOR);
        assert_eq!(*filled.get_pixel(256, 256), Rgba([220, 40, 40, 255]));

        let favicon = load_rgba(&out.join("favicon.png")).unwrap();
        assert_eq!(favicon.get_pixel(0, 0)[3], 0);
    }

    #[cfg(feature = "background-removal")]
    #[test]
    fn test_transparent_icon_source_keeps_artwork() {
        let (_dir, config) = project();
        let mut source = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 0]));
        for y in 25..75 {
            for x in 25..75 {
                source.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        write_source(&config, "Option1", &source);

        run(&config, BackgroundRemover::EdgeFlood).unwrap();

        let out = config.output_dir.join("Option1");
        let master = load_rgba(&out.join(MASTER_FILE)).unwrap();
        assert_eq!(master, source);

        let filled = load_rgba(&out.join("play_store_icon.png")).unwrap();
        assert_eq!(*filled.get_pixel(256, 256), Rgba([255, 255, 255, 255]));
        assert_eq!(*filled.get_pixel(10, 10), BACKGROUND_COLOR);
    }

    #[test]
    fn test_directory_at_source_path_fails() {
        let (_dir, config) = project();
        fs::create_dir(config.assets_dir.join("Generated_icon_1.png")).unwrap();

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        assert!(matches!(
            report.get("Option1").unwrap().outcome,
            SourceOutcome::Failed { .. }
        ));
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.missing_count(), 3);
    }

    #[test]
    fn test_full_run_all_sources() {
        let (_dir, config) = project();
        write_source(&config, "Option1", &icon_source(64));
        write_source(&config, "Option2", &icon_source(48));
        write_source(
            &config,
            "Feature",
            &RgbaImage::from_pixel(40, 20, Rgba([1, 2, 3, 255])),
        );
        write_source(
            &config,
            "Splash",
            &RgbaImage::from_pixel(30, 40, Rgba([4, 5, 6, 255])),
        );

        let report = run(&config, BackgroundRemover::Identity).unwrap();

        assert_eq!(report.completed_count(), 4);
        assert_eq!(report.output_count(), 7 + 7 + 1 + 1);
        assert_eq!(
            dims(&config.output_dir.join("Common/capacitor_splash.png")),
            (2732, 2732)
        );
    }

    #[test]
    fn test_unwritable_output_root_is_fatal() {
        let (_dir, config) = project();
        // A file where the output root should be.
        fs::write(&config.output_dir, b"").unwrap();

        let err = run(&config, BackgroundRemover::Identity).unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
    }
}
