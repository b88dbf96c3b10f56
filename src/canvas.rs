//! Narrow imaging capability used by both generators.
//!
//! The generators never touch `image` drawing or scaling APIs directly; they
//! ask an [`IconCanvas`] for a finished buffer. [`ImageCanvas`] is the
//! implementation backed by the `image` crate.

use image::{imageops::FilterType, Rgb, RgbImage, RgbaImage};
use tracing::debug;

pub trait IconCanvas {
    /// A `size`×`size` square of `fill` with an inset outline of `border`.
    fn create_solid_with_border(&self, size: u32, fill: Rgb<u8>, border: Rgb<u8>) -> RgbImage;

    /// Scale `source` to exactly `size`×`size`.
    fn resize(&self, source: &RgbaImage, size: u32) -> RgbaImage;
}

/// Outline thickness for a square icon of the given size.
pub fn border_width(size: u32) -> u32 {
    (size / 16).max(1)
}

/// `image`-crate backed canvas.
#[derive(Debug, Clone, Copy)]
pub struct ImageCanvas {
    filter: FilterType,
}

impl Default for ImageCanvas {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl ImageCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different resampling filter. `Nearest` is rejected in favour of
    /// the default since icons shrink a lot and alias badly.
    pub fn with_filter(filter: FilterType) -> Self {
        match filter {
            FilterType::Nearest => Self::default(),
            filter => Self { filter },
        }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl IconCanvas for ImageCanvas {
    fn create_solid_with_border(&self, size: u32, fill: Rgb<u8>, border: Rgb<u8>) -> RgbImage {
        let mut img = RgbImage::from_pixel(size, size, fill);
        let bw = border_width(size);

        // The outline box spans [bw, size - bw - 1] on both axes and the
        // stroke grows inward from its edge, leaving a `bw` ring of fill
        // outside it.
        if size <= 2 * bw {
            return img;
        }
        let (lo, hi) = (bw, size - bw - 1);
        let inner_lo = lo + bw;
        let inner_hi = hi.saturating_sub(bw);

        for y in lo..=hi {
            for x in lo..=hi {
                let on_stroke = x < inner_lo || x > inner_hi || y < inner_lo || y > inner_hi;
                if on_stroke {
                    img.put_pixel(x, y, border);
                }
            }
        }

        debug!(size, border_width = bw, "drew placeholder square");
        img
    }

    fn resize(&self, source: &RgbaImage, size: u32) -> RgbaImage {
        debug!(
            from_width = source.width(),
            from_height = source.height(),
            size,
            filter = ?self.filter,
            "resizing"
        );
        image::imageops::resize(source, size, size, self.filter)
    }
}
