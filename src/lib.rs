//! Icon set generation for a browser extension.
//!
//! Two independent generators share the same size set and file naming:
//! [`placeholder`] draws bordered solid squares, [`resample`] scales a
//! source image down. Both go through the [`canvas::IconCanvas`] capability
//! so the imaging backend stays behind one seam.

pub mod canvas;
pub mod error;
pub mod manifest;
pub mod placeholder;
pub mod png;
pub mod resample;

use image::Rgb;

pub use error::{IconError, Result};

/// Pixel sizes every extension icon set is produced at, in output order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// `#667eea`
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([102, 126, 234]);

pub const BORDER_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Format a color as `#rrggbb`.
pub fn hex_color(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse any CSS color string into an opaque RGB triple.
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    use std::str::FromStr;

    let color = css_color::Srgb::from_str(value)
        .map_err(|_| IconError::InvalidColor(value.to_string()))?;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

    Ok(Rgb([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    ]))
}
