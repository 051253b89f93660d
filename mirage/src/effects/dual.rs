//! The dual-appearance solve.
//!
//! Both sources are compressed into disjoint tone ranges (dark into `[0, 100]`, light into
//! `[150, 255]`). Per pixel, the smallest coverage `alpha` is picked so the worst channel's
//! light/dark gap is absorbed by the backdrop, and the dark tone is un-premultiplied by it.
//! Over black the result shows the dark tone exactly; over white it approximates the light one.
//!
//! Pixels are independent, so the buffer pass is a plain map and can be partitioned freely.

use rayon::prelude::*;

use crate::foundation::core::{DualImage, RasterImage, Rgb8, Rgba8};
use crate::foundation::error::{MirageError, MirageResult};
use crate::foundation::math::{packed_len, round_u8};

/// Dark source tone scale: `[0, 255] -> [0, 100]`.
pub(crate) const DARK_SCALE: f64 = 100.0 / 255.0;
/// Light source tone scale: `[0, 255] -> [0, 105]`, before the offset.
pub(crate) const LIGHT_SCALE: f64 = 105.0 / 255.0;
/// Light source tone offset, lifting it into `[150, 255]`.
pub(crate) const LIGHT_OFFSET: f64 = 150.0;

/// Floor for the solved alpha. Keeps `alpha / 255` strictly positive.
pub(crate) const MIN_ALPHA: f64 = 1.0;

/// Compressed dark tone `dark'` of one channel.
pub(crate) fn dark_tone(v: u8) -> f64 {
    f64::from(v) * DARK_SCALE
}

/// Compressed light tone `light'` of one channel.
pub(crate) fn light_tone(v: u8) -> f64 {
    f64::from(v) * LIGHT_SCALE + LIGHT_OFFSET
}

/// Solved alpha for one pixel, before rounding. Always in `[1, 255]`.
pub(crate) fn solve_alpha(light: Rgb8, dark: Rgb8) -> f64 {
    let max_diff = (0..3)
        .map(|c| light_tone(light[c]) - dark_tone(dark[c]))
        .fold(f64::NEG_INFINITY, f64::max);
    (255.0 - max_diff).clamp(MIN_ALPHA, 255.0)
}

/// Straight-alpha RGBA for one light/dark pixel pair.
pub fn composite_pixel(light: Rgb8, dark: Rgb8) -> Rgba8 {
    let alpha = solve_alpha(light, dark);
    let alpha_factor = alpha / 255.0;

    let mut out = [0u8; 4];
    for c in 0..3 {
        out[c] = round_u8(dark_tone(dark[c]) / alpha_factor);
    }
    out[3] = round_u8(alpha);
    out
}

/// Composite two same-size sources on the calling thread.
pub fn composite(light: &RasterImage, dark: &RasterImage) -> MirageResult<DualImage> {
    let (width, height) = check_pair(light, dark)?;
    let mut data = vec![0u8; packed_len(width, height, 4)?];
    for ((out, l), d) in data
        .chunks_exact_mut(4)
        .zip(light.data().chunks_exact(3))
        .zip(dark.data().chunks_exact(3))
    {
        out.copy_from_slice(&composite_pixel([l[0], l[1], l[2]], [d[0], d[1], d[2]]));
    }
    DualImage::new(width, height, data)
}

/// Composite two same-size sources, splitting the pixel range across the current rayon pool.
///
/// Output is byte-identical to [`composite`].
pub fn composite_par(light: &RasterImage, dark: &RasterImage) -> MirageResult<DualImage> {
    let (width, height) = check_pair(light, dark)?;
    let mut data = vec![0u8; packed_len(width, height, 4)?];

    // One work item per row.
    let row = width as usize;
    data.par_chunks_mut(row * 4)
        .zip(light.data().par_chunks(row * 3))
        .zip(dark.data().par_chunks(row * 3))
        .for_each(|((out_row, l_row), d_row)| {
            for ((out, l), d) in out_row
                .chunks_exact_mut(4)
                .zip(l_row.chunks_exact(3))
                .zip(d_row.chunks_exact(3))
            {
                out.copy_from_slice(&composite_pixel([l[0], l[1], l[2]], [d[0], d[1], d[2]]));
            }
        });
    DualImage::new(width, height, data)
}

fn check_pair(light: &RasterImage, dark: &RasterImage) -> MirageResult<(u32, u32)> {
    if light.dimensions() != dark.dimensions() {
        return Err(MirageError::invalid_input(format!(
            "composite expects equal sizes, got light {}x{} and dark {}x{}",
            light.width(),
            light.height(),
            dark.width(),
            dark.height()
        )));
    }
    if light.is_empty() {
        return Err(MirageError::invalid_input(
            "composite expects non-empty images",
        ));
    }
    Ok(light.dimensions())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dual.rs"]
mod tests;
