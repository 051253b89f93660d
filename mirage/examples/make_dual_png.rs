use std::path::Path;

use mirage::{Backdrop, DualOpts, DualSession, PngSink, PngSinkOpts, RasterImage, flatten};

/// Horizontal grey ramp, optionally inverted.
fn ramp(w: u32, h: u32, invert: bool) -> anyhow::Result<RasterImage> {
    let mut data = Vec::with_capacity((w * h * 3) as usize);
    for _y in 0..h {
        for x in 0..w {
            let v = ((x * 255) / (w - 1)) as u8;
            let v = if invert { 255 - v } else { v };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    Ok(RasterImage::new(w, h, data)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let light = ramp(256, 64, false)?;
    let dark = ramp(256, 64, true)?;

    let session = DualSession::new(DualOpts::default())?;
    let out_dir = Path::new("target/mirage_examples");

    let mut sink = PngSink::new(PngSinkOpts::new(out_dir.join("dual.png")));
    let render = session.render_into(&light, &dark, &mut sink)?;

    for (name, backdrop) in [("on_white", Backdrop::White), ("on_black", Backdrop::Black)] {
        let preview = flatten(&render.image, backdrop)?;
        preview
            .to_rgb_image()
            .save(out_dir.join(format!("{name}.png")))?;
    }

    println!("wrote {}", sink.out_path().display());
    Ok(())
}
