//! I/O helpers for RGBA images and JSON reports.
//!
//! - `load_rgba`: read a PNG/JPEG/etc. into an owned `PixelBuffer`.
//! - `save_rgba`: write a `PixelBuffer` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! These exist for the demo binaries and integration tests; the engines
//! themselves never touch the filesystem.

use super::rgba::PixelBuffer;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width();
    let height = img.height();
    Ok(PixelBuffer::from_samples(width, height, img.into_raw()))
}

/// Save an RGBA buffer to disk; the format is inferred from the extension.
pub fn save_rgba(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let img: RgbaImage =
        RgbaImage::from_raw(buffer.width, buffer.height, buffer.samples.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
