//! Background removal as an optional capability.

use image::RgbaImage;

use crate::{debug, log};

/// Strategy chosen once per run.
///
/// `Identity` is the degraded mode: icon sources are composited with their
/// original background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundRemover {
    /// Built-in LAB flood fill.
    #[cfg(feature = "background-removal")]
    EdgeFlood,
    /// Pass-through.
    Identity,
}

impl BackgroundRemover {
    /// Pick the strategy for this run, warning once when removal is unavailable.
    ///
    /// `disabled` forces pass-through even when the capability is compiled in.
    pub fn detect(disabled: bool) -> Self {
        let remover = Self::select(disabled);
        match remover {
            Self::Identity if disabled => {
                log!("nobg"; "background removal disabled, using sources as-is");
            }
            Self::Identity => {
                log!("warn"; "background removal not available in this build, skipping it");
            }
            #[cfg(feature = "background-removal")]
            Self::EdgeFlood => debug!("nobg"; "using edge-connected background removal"),
        }
        remover
    }

    fn select(disabled: bool) -> Self {
        if disabled {
            return Self::Identity;
        }
        Self::compiled_in()
    }

    #[cfg(feature = "background-removal")]
    const fn compiled_in() -> Self {
        Self::EdgeFlood
    }

    #[cfg(not(feature = "background-removal"))]
    const fn compiled_in() -> Self {
        Self::Identity
    }

    /// Whether `remove` actually changes images.
    pub fn is_available(self) -> bool {
        !matches!(self, Self::Identity)
    }

    /// Remove the background of `img`; `Identity` returns it unchanged.
    pub fn remove(self, img: RgbaImage) -> RgbaImage {
        match self {
            #[cfg(feature = "background-removal")]
            Self::EdgeFlood => super::remove_background(img),
            Self::Identity => img,
        }
    }
}
