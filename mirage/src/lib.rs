//! Mirage builds dual-appearance images.
//!
//! Given a "light" and a "dark" source, it solves one straight-alpha RGBA raster that looks like
//! the light source over a white backdrop and like the dark source over a black one.
//!
//! - Decode sources through a [`RasterSource`] (the `image`-backed [`ImageCodec`] by default)
//! - Create a [`DualSession`] from [`DualOpts`]
//! - Render, then hand the [`DualImage`] to a [`RasterSink`] such as [`PngSink`]
//!
//! The building blocks ([`resolve`], [`resample`], [`composite`]) are exposed as pure functions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod foundation;
mod geometry;

/// Output sinks.
pub mod encode;
/// Session-oriented pipeline API.
pub mod session;

pub use crate::assets::decode::{ImageCodec, RasterSource, decode_path};
pub use crate::effects::backdrop::{Backdrop, flatten};
pub use crate::effects::dual::{composite, composite_par, composite_pixel};
pub use crate::encode::png::{PngSink, PngSinkOpts, encode_png};
pub use crate::encode::sink::{InMemorySink, RasterSink};
pub use crate::foundation::core::{DualImage, RasterImage, Rgb8, Rgba8};
pub use crate::foundation::error::{MirageError, MirageResult};
pub use crate::geometry::resample::resample;
pub use crate::geometry::resolve::{DimensionMismatch, Resolution, resolve};
pub use crate::session::dual_session::{DualRender, DualSession, make_dual_image};
pub use crate::session::opts::{DualOpts, ResampleFilter, ScalePolicy, SizeBasis};
