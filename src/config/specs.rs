//! Hardcoded source and output tables.
//!
//! | Category           | Used by                  |
//! |--------------------|--------------------------|
//! | `icon_transparent` | icon sources, fitted     |
//! | `icon_filled`      | icon sources, composed   |
//! | `feature`          | `Feature`, cover-cropped |
//! | `splash`           | `Splash`, cover-cropped  |

use image::Rgba;

/// Theme fill for filled icon variants (`#0f172a`, dark slate blue).
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([15, 23, 42, 255]);

/// File name of the background-removed master saved next to each icon set.
pub const MASTER_FILE: &str = "master_transparent.png";

/// A single output file and its exact pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    pub file: &'static str,
    pub width: u32,
    pub height: u32,
}

impl OutputSpec {
    const fn new(file: &'static str, width: u32, height: u32) -> Self {
        Self {
            file,
            width,
            height,
        }
    }

    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

const ICON_TRANSPARENT: &[OutputSpec] = &[
    OutputSpec::new("pwa_icon_512.png", 512, 512),
    OutputSpec::new("pwa_icon_192.png", 192, 192),
    OutputSpec::new("favicon.png", 64, 64),
    OutputSpec::new("apple-touch-icon.png", 180, 180),
];

const ICON_FILLED: &[OutputSpec] = &[
    OutputSpec::new("play_store_icon.png", 512, 512),
    OutputSpec::new("capacitor_icon.png", 1024, 1024),
];

const FEATURE: &[OutputSpec] = &[OutputSpec::new("feature_graphic.png", 1024, 500)];

const SPLASH: &[OutputSpec] = &[OutputSpec::new("capacitor_splash.png", 2732, 2732)];

/// Named group of output specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecCategory {
    IconTransparent,
    IconFilled,
    Feature,
    Splash,
}

impl SpecCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IconTransparent => "icon_transparent",
            Self::IconFilled => "icon_filled",
            Self::Feature => "feature",
            Self::Splash => "splash",
        }
    }

    /// Output specs of this category, in generation order.
    pub const fn specs(self) -> &'static [OutputSpec] {
        match self {
            Self::IconTransparent => ICON_TRANSPARENT,
            Self::IconFilled => ICON_FILLED,
            Self::Feature => FEATURE,
            Self::Splash => SPLASH,
        }
    }
}

/// How a source image is turned into outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePipeline {
    /// Background removal, cleaned master, transparent and filled icons.
    IconSet,
    /// Cover resize and center crop for every spec of the category.
    Cover(SpecCategory),
}

/// A named input file bound to a pipeline and an output subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceAsset {
    pub name: &'static str,
    /// File name under the assets directory.
    pub file: &'static str,
    /// Subdirectory under the output root.
    pub output_dir: &'static str,
    pub pipeline: SourcePipeline,
}

/// Sources in processing order.
pub const SOURCES: &[SourceAsset] = &[
    SourceAsset {
        name: "Option1",
        file: "Generated_icon_1.png",
        output_dir: "Option1",
        pipeline: SourcePipeline::IconSet,
    },
    SourceAsset {
        name: "Option2",
        file: "Generated_icon_2.png",
        output_dir: "Option2",
        pipeline: SourcePipeline::IconSet,
    },
    SourceAsset {
        name: "Feature",
        file: "feature_graphic.png",
        output_dir: "Common",
        pipeline: SourcePipeline::Cover(SpecCategory::Feature),
    },
    SourceAsset {
        name: "Splash",
        file: "generated_splash.png",
        output_dir: "Common",
        pipeline: SourcePipeline::Cover(SpecCategory::Splash),
    },
];
