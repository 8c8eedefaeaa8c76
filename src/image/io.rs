use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::AssetError;

/// Decode an image file and normalize it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path)
        .map_err(|err| AssetError::Decode(path.to_path_buf(), err))?
        .to_rgba8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty(path.to_path_buf(), width, height));
    }
    Ok(img)
}

/// Write an RGBA image as PNG, creating the parent directory if needed.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), AssetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| AssetError::Io(parent.to_path_buf(), err))?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|err| AssetError::Encode(path.to_path_buf(), err))
}
