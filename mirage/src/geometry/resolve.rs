use std::fmt;

use crate::foundation::core::RasterImage;
use crate::foundation::error::{MirageError, MirageResult};
use crate::session::opts::{ScalePolicy, SizeBasis};

/// Advisory raised when the two sources have different native sizes.
///
/// Informational only: the pipeline keeps going with the basis size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Basis that decided the output size.
    pub basis: SizeBasis,
    /// Native light-source size.
    pub light: (u32, u32),
    /// Native dark-source size.
    pub dark: (u32, u32),
    /// Resolved output size.
    pub output: (u32, u32),
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source sizes differ (light {}x{}, dark {}x{}); using {} image size {}x{}",
            self.light.0,
            self.light.1,
            self.dark.0,
            self.dark.1,
            self.basis,
            self.output.0,
            self.output.1
        )
    }
}

/// Output size plus the effective policy for each source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Policy the light source is resampled with.
    pub light_policy: ScalePolicy,
    /// Policy the dark source is resampled with.
    pub dark_policy: ScalePolicy,
    /// Present when the native sizes differ.
    pub mismatch: Option<DimensionMismatch>,
}

/// Pick the output size from `basis` and assign per-source policies.
///
/// The basis source always resolves to `Stretch`, which is an identity at its own size.
pub fn resolve(
    light: &RasterImage,
    dark: &RasterImage,
    basis: SizeBasis,
    policy: ScalePolicy,
) -> MirageResult<Resolution> {
    if light.is_empty() {
        return Err(MirageError::invalid_input(format!(
            "light source has zero area ({}x{})",
            light.width(),
            light.height()
        )));
    }
    if dark.is_empty() {
        return Err(MirageError::invalid_input(format!(
            "dark source has zero area ({}x{})",
            dark.width(),
            dark.height()
        )));
    }

    let ((width, height), light_policy, dark_policy) = match basis {
        SizeBasis::Light => (light.dimensions(), ScalePolicy::Stretch, policy),
        SizeBasis::Dark => (dark.dimensions(), policy, ScalePolicy::Stretch),
    };

    let mismatch = (light.dimensions() != dark.dimensions()).then(|| DimensionMismatch {
        basis,
        light: light.dimensions(),
        dark: dark.dimensions(),
        output: (width, height),
    });
    if let Some(m) = &mismatch {
        tracing::warn!(%basis, width, height, "{m}");
    }

    Ok(Resolution {
        width,
        height,
        light_policy,
        dark_policy,
        mismatch,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolve.rs"]
mod tests;
