use std::path::Path;
use std::time::Instant;

use crate::assets::decode::{ImageCodec, RasterSource, decode_path};
use crate::effects::dual::{composite, composite_par};
use crate::encode::sink::RasterSink;
use crate::foundation::core::{DualImage, RasterImage};
use crate::foundation::error::{MirageError, MirageResult};
use crate::geometry::resample::resample;
use crate::geometry::resolve::{DimensionMismatch, Resolution, resolve};
use crate::session::opts::{DualOpts, ScalePolicy, SizeBasis};

/// A finished composite plus the advisory raised while resolving sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualRender {
    /// The composite.
    pub image: DualImage,
    /// Set when the sources had different native sizes.
    pub mismatch: Option<DimensionMismatch>,
}

/// Reusable pipeline: resolve, resample both sources, composite.
///
/// Sessions hold no per-render state, so one session may serve any number of renders. In
/// parallel mode the session owns a dedicated rayon pool.
pub struct DualSession {
    opts: DualOpts,
    pool: Option<rayon::ThreadPool>,
}

impl DualSession {
    /// Validate `opts` and build the worker pool when parallel mode is on.
    pub fn new(opts: DualOpts) -> MirageResult<Self> {
        opts.validate()?;
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self { opts, pool })
    }

    /// Options this session was built with.
    pub fn opts(&self) -> &DualOpts {
        &self.opts
    }

    /// Composite two decoded sources.
    ///
    /// Zero-area sources fail with [`MirageError::InvalidInput`]; nothing partial is returned.
    #[tracing::instrument(
        skip_all,
        fields(
            light = ?light.dimensions(),
            dark = ?dark.dimensions(),
            basis = %self.opts.size_basis,
            policy = %self.opts.scale_policy,
        )
    )]
    pub fn render(&self, light: &RasterImage, dark: &RasterImage) -> MirageResult<DualRender> {
        let started = Instant::now();
        let res = resolve(
            light,
            dark,
            self.opts.size_basis,
            self.opts.scale_policy,
        )?;

        let image = match &self.pool {
            Some(pool) => pool.install(|| self.render_parallel(light, dark, &res))?,
            None => self.render_sequential(light, dark, &res)?,
        };

        tracing::debug!(
            width = res.width,
            height = res.height,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "composite done"
        );
        Ok(DualRender {
            image,
            mismatch: res.mismatch,
        })
    }

    /// Decode both sources with `source`, then [`render`](Self::render).
    pub fn render_bytes(
        &self,
        source: &dyn RasterSource,
        light_bytes: &[u8],
        dark_bytes: &[u8],
    ) -> MirageResult<DualRender> {
        let light = source
            .decode(light_bytes)
            .map_err(|e| tag_source(e, "light"))?;
        let dark = source
            .decode(dark_bytes)
            .map_err(|e| tag_source(e, "dark"))?;
        self.render(&light, &dark)
    }

    /// Read and decode both files, then [`render`](Self::render).
    pub fn render_paths(
        &self,
        source: &dyn RasterSource,
        light_path: &Path,
        dark_path: &Path,
    ) -> MirageResult<DualRender> {
        let light = decode_path(source, light_path)?;
        let dark = decode_path(source, dark_path)?;
        self.render(&light, &dark)
    }

    /// [`render`](Self::render), then hand the composite to `sink`.
    ///
    /// The sink is not called when rendering fails.
    pub fn render_into(
        &self,
        light: &RasterImage,
        dark: &RasterImage,
        sink: &mut dyn RasterSink,
    ) -> MirageResult<DualRender> {
        let out = self.render(light, dark)?;
        sink.consume(&out.image)?;
        Ok(out)
    }

    fn render_sequential(
        &self,
        light: &RasterImage,
        dark: &RasterImage,
        res: &Resolution,
    ) -> MirageResult<DualImage> {
        let light = self.resample_one(light, res, res.light_policy)?;
        let dark = self.resample_one(dark, res, res.dark_policy)?;
        composite(&light, &dark)
    }

    fn render_parallel(
        &self,
        light: &RasterImage,
        dark: &RasterImage,
        res: &Resolution,
    ) -> MirageResult<DualImage> {
        let (light, dark) = rayon::join(
            || self.resample_one(light, res, res.light_policy),
            || self.resample_one(dark, res, res.dark_policy),
        );
        composite_par(&light?, &dark?)
    }

    fn resample_one(
        &self,
        source: &RasterImage,
        res: &Resolution,
        policy: ScalePolicy,
    ) -> MirageResult<RasterImage> {
        resample(source, res.width, res.height, policy, self.opts.filter)
    }
}

/// One-shot pipeline over encoded bytes with default options otherwise.
pub fn make_dual_image(
    light_bytes: &[u8],
    dark_bytes: &[u8],
    basis: SizeBasis,
    policy: ScalePolicy,
) -> MirageResult<DualImage> {
    let session = DualSession::new(DualOpts {
        size_basis: basis,
        scale_policy: policy,
        ..DualOpts::default()
    })?;
    Ok(session
        .render_bytes(&ImageCodec, light_bytes, dark_bytes)?
        .image)
}

fn tag_source(err: MirageError, which: &str) -> MirageError {
    match err {
        MirageError::Decode(msg) => MirageError::decode(format!("{which} source: {msg}")),
        other => other,
    }
}

fn build_thread_pool(threads: Option<usize>) -> MirageResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MirageError::invalid_input(
            "option 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MirageError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/dual_session.rs"]
mod tests;
