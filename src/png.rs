use crate::error::{IconError, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub fn write_rgb_png(path: &Path, image: &RgbImage) -> Result<()> {
    write_png_file(path, image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
}

pub fn write_rgba_png(path: &Path, image: &RgbaImage) -> Result<()> {
    write_png_file(path, image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
}

fn write_png_file(
    path: &Path,
    data: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
) -> Result<()> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    write_png(&mut writer, data, width, height, color).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| IconError::io(path, e))
}

// Encode image data as PNG with the strongest compression
fn write_png<W: Write>(
    w: W,
    data: &[u8],
    width: u32,
    height: u32,
    color: ColorType,
) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(data, width, height, color)
}
