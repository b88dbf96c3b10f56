//! Placeholder icon set: a solid square with a white inset outline per size.

use crate::{
    canvas::IconCanvas,
    error::{IconError, Result},
    hex_color, icon_file_name, png::write_rgb_png, BORDER_COLOR, ICON_SIZES,
};
use image::Rgb;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing::info;

/// Draw and write `icon{size}.png` for every icon size into `out_dir`.
///
/// Existing files are overwritten. Output is fully determined by `color`,
/// so repeated runs produce identical files.
pub fn generate_placeholders(
    canvas: &impl IconCanvas,
    out_dir: &Path,
    color: Rgb<u8>,
) -> Result<Vec<PathBuf>> {
    create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;
    info!(dir = %out_dir.display(), color = %hex_color(color), "generating placeholder icons");

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let img = canvas.create_solid_with_border(size, color, BORDER_COLOR);

        let filename = icon_file_name(size);
        let output_path = out_dir.join(&filename);
        write_rgb_png(&output_path, &img)?;
        println!("Created {filename}");

        written.push(output_path);
    }

    println!("\nIcons created successfully!");
    Ok(written)
}

/// Lines telling an operator how to produce the placeholder set by hand.
pub fn manual_instructions(color: Rgb<u8>) -> Vec<String> {
    let hex = hex_color(color);
    ICON_SIZES
        .iter()
        .map(|&size| format!("- {}: {size}x{size} pixels, color {hex}", icon_file_name(size)))
        .collect()
}
