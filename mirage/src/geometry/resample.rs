use crate::foundation::core::RasterImage;
use crate::foundation::error::{MirageError, MirageResult};
use crate::session::opts::{ResampleFilter, ScalePolicy};

/// Placement of a `Fit`-scaled source inside the target rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FitRect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Aspect-preserving placement of `src` centered in `target`.
///
/// The scaled size is rounded and kept within `[1, target]` on each axis, so no source
/// pixel is ever cropped. Offsets use floor division; odd leftovers go to the right/bottom.
pub(crate) fn fit_rect(src: (u32, u32), target: (u32, u32)) -> FitRect {
    let (sw, sh) = (f64::from(src.0), f64::from(src.1));
    let (tw, th) = target;
    let scale = (f64::from(tw) / sw).min(f64::from(th) / sh);

    let width = ((sw * scale).round() as u32).clamp(1, tw);
    let height = ((sh * scale).round() as u32).clamp(1, th);
    FitRect {
        x: (tw - width) / 2,
        y: (th - height) / 2,
        width,
        height,
    }
}

/// Render `source` into a fresh `target_w x target_h` buffer under `policy`.
///
/// When the source already has the target size its pixels are copied unchanged.
pub fn resample(
    source: &RasterImage,
    target_w: u32,
    target_h: u32,
    policy: ScalePolicy,
    filter: ResampleFilter,
) -> MirageResult<RasterImage> {
    if target_w == 0 || target_h == 0 {
        return Err(MirageError::invalid_input(format!(
            "resample target must be non-empty, got {target_w}x{target_h}"
        )));
    }
    if source.is_empty() {
        return Err(MirageError::invalid_input(
            "cannot resample a zero-area source",
        ));
    }
    if source.dimensions() == (target_w, target_h) {
        return Ok(source.clone());
    }

    let out = match policy {
        ScalePolicy::Stretch => stretch(source, target_w, target_h, filter),
        ScalePolicy::Fit => fit(source, target_w, target_h, filter),
    };
    debug_assert_eq!(out.dimensions(), (target_w, target_h));
    Ok(out)
}

fn stretch(source: &RasterImage, w: u32, h: u32, filter: ResampleFilter) -> RasterImage {
    let src = source.to_rgb_image();
    RasterImage::from(image::imageops::resize(&src, w, h, filter.filter_type()))
}

fn fit(source: &RasterImage, w: u32, h: u32, filter: ResampleFilter) -> RasterImage {
    let rect = fit_rect(source.dimensions(), (w, h));
    let src = source.to_rgb_image();
    let scaled = if (rect.width, rect.height) == source.dimensions() {
        src
    } else {
        image::imageops::resize(&src, rect.width, rect.height, filter.filter_type())
    };

    // Zero-initialized: padding stays RGB black.
    let mut canvas = image::RgbImage::new(w, h);
    image::imageops::replace(&mut canvas, &scaled, i64::from(rect.x), i64::from(rect.y));
    RasterImage::from(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resample.rs"]
mod tests;
