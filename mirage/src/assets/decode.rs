use std::path::Path;

use crate::foundation::core::RasterImage;
use crate::foundation::error::{MirageError, MirageResult};

/// Decodes encoded image bytes into an RGB8 raster.
pub trait RasterSource {
    /// Decode one image. Failures are [`MirageError::Decode`].
    fn decode(&self, bytes: &[u8]) -> MirageResult<RasterImage>;
}

/// [`RasterSource`] backed by the `image` crate (PNG, JPEG, GIF, WebP, ...).
///
/// Source alpha is discarded; the compositor works on opaque RGB.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCodec;

impl RasterSource for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> MirageResult<RasterImage> {
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| MirageError::decode(format!("decode image from memory: {e}")))?;
        Ok(RasterImage::from(dyn_img.to_rgb8()))
    }
}

/// Read `path` and decode it with `source`.
pub fn decode_path(source: &dyn RasterSource, path: &Path) -> MirageResult<RasterImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| MirageError::decode(format!("read '{}': {e}", path.display())))?;
    source
        .decode(&bytes)
        .map_err(|e| match e {
            MirageError::Decode(msg) => MirageError::decode(format!("'{}': {msg}", path.display())),
            other => other,
        })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
