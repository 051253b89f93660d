use crate::foundation::error::{MirageError, MirageResult};
use crate::foundation::math::packed_len;

/// One straight RGB8 pixel.
pub type Rgb8 = [u8; 3];

/// One straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Decoded source raster: packed RGB8, row-major, no alpha.
///
/// Fields are private so a constructed image always satisfies
/// `data.len() == width * height * 3`. Zero-area images are representable so the
/// resolver can reject them with a proper error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap a packed RGB8 buffer, validating its length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> MirageResult<Self> {
        let expected = packed_len(width, height, 3)?;
        if data.len() != expected {
            return Err(MirageError::invalid_input(format!(
                "rgb8 buffer for {width}x{height} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: Rgb8) -> MirageResult<Self> {
        let len = packed_len(width, height, 3)?;
        let data = rgb.repeat(len / 3);
        Self::new(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Packed RGB8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Consume the image and return its packed bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy into an `image` buffer.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }
}

impl From<image::RgbImage> for RasterImage {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// Composite output: packed straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DualImage {
    /// Wrap a packed RGBA8 buffer, validating its length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> MirageResult<Self> {
        let expected = packed_len(width, height, 4)?;
        if data.len() != expected {
            return Err(MirageError::invalid_input(format!(
                "rgba8 buffer for {width}x{height} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Packed RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Consume the image and return its packed bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy into an `image` buffer.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

impl From<image::RgbaImage> for DualImage {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
