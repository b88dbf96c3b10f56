use anyhow::{bail, Context, Result};
use ext_icons::{icon_file_name, ICON_SIZES};
use image::io::Reader as ImageReader;
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Checking icons in: {}", dir.display());

    let mut failures = 0;
    for size in ICON_SIZES {
        let path = dir.join(icon_file_name(size));
        if !path.exists() {
            println!("  ✗ {} missing", path.display());
            failures += 1;
            continue;
        }

        let img = ImageReader::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        let alpha = if img.color().has_alpha() { "RGBA" } else { "RGB" };
        if img.width() == size && img.height() == size {
            println!("  ✓ {}: {}x{} {alpha}", path.display(), img.width(), img.height());
        } else {
            println!(
                "  ✗ {}: {}x{}, expected {size}x{size}",
                path.display(),
                img.width(),
                img.height()
            );
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} icon(s) failed verification");
    }
    println!("✓ All icons present with the right dimensions");
    Ok(())
}
