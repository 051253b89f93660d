use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

use crate::foundation::error::{MirageError, MirageResult};

/// Which source's native size becomes the output size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBasis {
    /// Output takes the light-source dimensions.
    #[default]
    Light,
    /// Output takes the dark-source dimensions.
    Dark,
}

/// Resampling rule for the non-basis source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePolicy {
    /// Fill the target exactly, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Preserve aspect ratio, center, pad with black.
    Fit,
}

/// Pixel filter used when a source actually changes size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    /// Nearest-neighbor sampling.
    Nearest,
    /// Bilinear (triangle) filtering.
    #[default]
    Bilinear,
}

impl SizeBasis {
    /// Lowercase name, as accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl ScalePolicy {
    /// Lowercase name, as accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Fit => "fit",
        }
    }
}

impl ResampleFilter {
    /// Lowercase name, as accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        }
    }

    pub(crate) fn filter_type(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Bilinear => image::imageops::FilterType::Triangle,
        }
    }
}

impl FromStr for SizeBasis {
    type Err = MirageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(MirageError::invalid_input(format!(
                "unknown size basis '{other}' (expected light|dark)"
            ))),
        }
    }
}

impl FromStr for ScalePolicy {
    type Err = MirageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "fit" => Ok(Self::Fit),
            other => Err(MirageError::invalid_input(format!(
                "unknown scale policy '{other}' (expected stretch|fit)"
            ))),
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = MirageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            other => Err(MirageError::invalid_input(format!(
                "unknown resample filter '{other}' (expected nearest|bilinear)"
            ))),
        }
    }
}

impl fmt::Display for SizeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a [`DualSession`](crate::DualSession).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DualOpts {
    /// Source whose native size becomes the output size.
    pub size_basis: SizeBasis,
    /// Resampling rule for the non-basis source.
    pub scale_policy: ScalePolicy,
    /// Filter used when a source is resized.
    pub filter: ResampleFilter,
    /// Run resampling and compositing on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for DualOpts {
    fn default() -> Self {
        Self {
            size_basis: SizeBasis::Light,
            scale_policy: ScalePolicy::Stretch,
            filter: ResampleFilter::Bilinear,
            parallel: true,
            threads: None,
        }
    }
}

impl DualOpts {
    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> MirageResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Parse options from JSON text.
    pub fn from_json_str(text: &str) -> MirageResult<Self> {
        let opts: Self = serde_json::from_str(text)
            .map_err(|e| MirageError::invalid_input(format!("options json: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject option combinations that cannot run.
    pub fn validate(&self) -> MirageResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(MirageError::invalid_input(
                "option 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
