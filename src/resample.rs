//! Icon set scaled down from a single source image.

use crate::{
    canvas::IconCanvas,
    error::{IconError, Result},
    icon_file_name,
    png::write_rgba_png,
    ICON_SIZES,
};
use image::{DynamicImage, RgbaImage};
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const DEFAULT_SOURCE: &str = "pip_bird.png";
pub const DEFAULT_OUTPUT_DIR: &str = "docs/assets";

/// Resize `source` to every icon size and write the results to `out_dir`.
///
/// A missing source fails with [`IconError::MissingSource`] before anything
/// is created on disk. Outputs are always RGBA so transparent regions of
/// the source survive resampling.
pub fn create_icons(
    canvas: &impl IconCanvas,
    source: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let img = load_source(source)?;

    create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let resized = canvas.resize(&img, size);

        let output_path = out_dir.join(icon_file_name(size));
        write_rgba_png(&output_path, &resized)?;
        println!("Created: {}", output_path.display());

        written.push(output_path);
    }

    println!("\n✅ All icons created successfully!");
    println!("Reload the extension in chrome://extensions to see the new icon.");
    Ok(written)
}

fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(IconError::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let source = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        color = ?source.color(),
        "loaded source image"
    );

    Ok(normalize(source))
}

/// Bring any decoded image to 8-bit RGBA.
fn normalize(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            if !other.color().has_alpha() {
                debug!(from = ?other.color(), "adding alpha channel");
            }
            other.into_rgba8()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ImageCanvas;
    use image::{Rgb, RgbImage, Rgba};
    use tempfile::TempDir;

    #[test]
    fn missing_source_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("docs").join("assets");
        let source = dir.path().join("pip_bird.png");

        let err = create_icons(&ImageCanvas::new(), &source, &out).unwrap_err();

        match err {
            IconError::MissingSource { path } => assert_eq!(path, source),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn undecodable_source_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("pip_bird.png");
        std::fs::write(&source, b"definitely not a png").unwrap();

        let err = create_icons(&ImageCanvas::new(), &source, dir.path()).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn rgb_source_gains_alpha() {
        let rgb = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        let rgba = normalize(DynamicImage::ImageRgb8(rgb));
        assert_eq!(*rgba.get_pixel(3, 3), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn rgba_source_is_untouched() {
        let src = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 40]));
        let rgba = normalize(DynamicImage::ImageRgba8(src.clone()));
        assert_eq!(rgba, src);
    }

    #[test]
    fn writes_rgba_icons_at_each_size() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bird.png");
        RgbImage::from_pixel(512, 512, Rgb([200, 100, 50]))
            .save(&source)
            .unwrap();
        let out = dir.path().join("assets");

        let written = create_icons(&ImageCanvas::new(), &source, &out).unwrap();

        assert_eq!(written.len(), ICON_SIZES.len());
        for (path, size) in written.iter().zip(ICON_SIZES) {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
            assert!(img.color().has_alpha(), "{} lacks alpha", path.display());
        }
    }

    #[test]
    fn existing_output_dir_is_fine() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bird.png");
        RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]))
            .save(&source)
            .unwrap();

        create_icons(&ImageCanvas::new(), &source, dir.path()).unwrap();
        create_icons(&ImageCanvas::new(), &source, dir.path()).unwrap();

        let icon = image::open(dir.path().join("icon48.png")).unwrap().to_rgba8();
        assert_eq!(icon.get_pixel(24, 24)[3], 0);
    }
}
