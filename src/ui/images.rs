//! Decoding and scaling of the button images.

use crate::core::error::{ClickerError, Result};
use egui::ColorImage;
use image::imageops::FilterType;
use std::path::Path;

/// Load the image at `path` and scale it to exactly `size` pixels.
pub fn load_scaled(path: &Path, size: [usize; 2]) -> Result<ColorImage> {
    let decoded = image::open(path).map_err(|source| ClickerError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(ClickerError::ImageEmpty {
            path: path.to_path_buf(),
        });
    }

    let [width, height] = size.map(|side| side.max(1));
    let scaled = decoded
        .resize_exact(width as u32, height as u32, FilterType::Lanczos3)
        .to_rgba8();

    Ok(ColorImage::from_rgba_unmultiplied(
        [width, height],
        scaled.as_raw(),
    ))
}

/// Pixel size to scale to: the button's rendered size when it has one,
/// otherwise `fallback`.
pub fn target_size(rendered: Option<egui::Vec2>, fallback: f32) -> [usize; 2] {
    let side = |v: f32| if v > 0.0 { v } else { fallback };
    match rendered {
        Some(size) => [side(size.x).round() as usize, side(size.y).round() as usize],
        None => [fallback.round() as usize; 2],
    }
}
