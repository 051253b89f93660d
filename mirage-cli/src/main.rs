use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mirage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a dual-appearance PNG from a light and a dark source.
    Make(MakeArgs),
    /// Flatten a dual-appearance PNG over a solid backdrop.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct MakeArgs {
    /// Image shown over a white backdrop.
    #[arg(long)]
    light: PathBuf,

    /// Image shown over a black backdrop.
    #[arg(long)]
    dark: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON options file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source whose native size becomes the output size.
    #[arg(long, value_enum)]
    basis: Option<BasisChoice>,

    /// Resampling rule for the non-basis source.
    #[arg(long, value_enum)]
    policy: Option<PolicyChoice>,

    /// Pixel filter used when a source is resized.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Run on the calling thread only.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Dual-appearance PNG to flatten.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// `white`, `black` or `#rrggbb`.
    #[arg(long, default_value = "white")]
    backdrop: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BasisChoice {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    Stretch,
    Fit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Bilinear,
}

impl From<BasisChoice> for mirage::SizeBasis {
    fn from(v: BasisChoice) -> Self {
        match v {
            BasisChoice::Light => Self::Light,
            BasisChoice::Dark => Self::Dark,
        }
    }
}

impl From<PolicyChoice> for mirage::ScalePolicy {
    fn from(v: PolicyChoice) -> Self {
        match v {
            PolicyChoice::Stretch => Self::Stretch,
            PolicyChoice::Fit => Self::Fit,
        }
    }
}

impl From<FilterChoice> for mirage::ResampleFilter {
    fn from(v: FilterChoice) -> Self {
        match v {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Bilinear => Self::Bilinear,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Make(args) => cmd_make(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_opts(args: &MakeArgs) -> anyhow::Result<mirage::DualOpts> {
    let mut opts = match &args.config {
        Some(path) => mirage::DualOpts::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => mirage::DualOpts::default(),
    };
    if let Some(basis) = args.basis {
        opts.size_basis = basis.into();
    }
    if let Some(policy) = args.policy {
        opts.scale_policy = policy.into();
    }
    if let Some(filter) = args.filter {
        opts.filter = filter.into();
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if args.sequential {
        opts.parallel = false;
    }
    Ok(opts)
}

fn cmd_make(args: MakeArgs) -> anyhow::Result<()> {
    let opts = build_opts(&args)?;
    tracing::debug!(?opts, "resolved options");

    let session = mirage::DualSession::new(opts)?;
    let render = session.render_paths(&mirage::ImageCodec, &args.light, &args.dark)?;

    let mut sink = mirage::PngSink::new(mirage::PngSinkOpts {
        out_path: args.out.clone(),
        overwrite: !args.no_overwrite,
    });
    mirage::RasterSink::consume(&mut sink, &render.image)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let backdrop: mirage::Backdrop = args.backdrop.parse()?;
    let rgba = image::open(&args.in_path)
        .with_context(|| format!("open '{}'", args.in_path.display()))?
        .to_rgba8();
    let flat = mirage::flatten(&mirage::DualImage::from(rgba), backdrop)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        flat.data(),
        flat.width(),
        flat.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
