use crate::foundation::error::{MirageError, MirageResult};

/// Byte length of a packed `width x height` buffer with `channels` bytes per pixel.
pub(crate) fn packed_len(width: u32, height: u32, channels: usize) -> MirageResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| MirageError::invalid_input("image buffer size overflow"))
}

/// Clamp to `[0, 255]` and round half away from zero.
pub(crate) fn round_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
