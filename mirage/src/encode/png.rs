use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::encode::sink::RasterSink;
use crate::foundation::core::DualImage;
use crate::foundation::error::{MirageError, MirageResult};

/// Encode a composite as an RGBA8 PNG.
pub fn encode_png(image: &DualImage) -> MirageResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image.to_rgba_image())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| MirageError::encode(format!("png encode: {e}")))?;
    Ok(buf)
}

/// Options for [`PngSink`].
#[derive(Clone, Debug)]
pub struct PngSinkOpts {
    /// Output PNG file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl PngSinkOpts {
    /// Create options for writing a PNG to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that writes each composite to a PNG file.
#[derive(Clone, Debug)]
pub struct PngSink {
    opts: PngSinkOpts,
}

impl PngSink {
    /// Create a sink writing to `opts.out_path`.
    pub fn new(opts: PngSinkOpts) -> Self {
        Self { opts }
    }

    /// Destination path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl RasterSink for PngSink {
    fn consume(&mut self, image: &DualImage) -> MirageResult<()> {
        let path = &self.opts.out_path;
        ensure_parent_dir(path)?;
        if !self.opts.overwrite && path.exists() {
            return Err(MirageError::encode(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }

        let bytes = encode_png(image)?;
        std::fs::write(path, bytes)
            .map_err(|e| MirageError::encode(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote png");
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> MirageResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            MirageError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
