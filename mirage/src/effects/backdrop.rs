use std::str::FromStr;

use crate::foundation::core::{DualImage, RasterImage, Rgb8};
use crate::foundation::error::{MirageError, MirageResult};
use crate::foundation::math::{packed_len, round_u8};

/// Solid backdrop a composite is previewed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Pure white; shows the light source.
    White,
    /// Pure black; shows the dark source.
    Black,
    /// Any other opaque color.
    Solid(Rgb8),
}

impl Backdrop {
    /// Opaque backdrop color.
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
            Self::Solid(rgb) => rgb,
        }
    }
}

impl FromStr for Backdrop {
    type Err = MirageError;

    /// Accepts `white`, `black` or a `#rrggbb` hex color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::White),
            "black" => return Ok(Self::Black),
            _ => {}
        }
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| {
                MirageError::invalid_input(format!(
                    "unknown backdrop '{s}' (expected white|black|#rrggbb)"
                ))
            })?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| MirageError::invalid_input(format!("backdrop '{s}': {e}")))
        };
        Ok(Self::Solid([channel(0)?, channel(2)?, channel(4)?]))
    }
}

/// Flatten a straight-alpha composite over an opaque backdrop.
pub fn flatten(image: &DualImage, backdrop: Backdrop) -> MirageResult<RasterImage> {
    let bg = backdrop.rgb();
    let mut data = vec![0u8; packed_len(image.width(), image.height(), 3)?];
    for (out, px) in data.chunks_exact_mut(3).zip(image.data().chunks_exact(4)) {
        let a = f64::from(px[3]) / 255.0;
        for c in 0..3 {
            out[c] = round_u8(f64::from(px[c]) * a + f64::from(bg[c]) * (1.0 - a));
        }
    }
    RasterImage::new(image.width(), image.height(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/backdrop.rs"]
mod tests;
