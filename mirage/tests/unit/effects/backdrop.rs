use super::*;
use crate::effects::dual::{composite, dark_tone, light_tone};

#[test]
fn backdrop_parses_names_and_hex() {
    assert_eq!("white".parse::<Backdrop>().unwrap(), Backdrop::White);
    assert_eq!("BLACK".parse::<Backdrop>().unwrap(), Backdrop::Black);
    assert_eq!(
        "#10ff80".parse::<Backdrop>().unwrap(),
        Backdrop::Solid([0x10, 0xff, 0x80])
    );
    assert!("grey".parse::<Backdrop>().is_err());
    assert!("#12345".parse::<Backdrop>().is_err());
    assert!("#zz0000".parse::<Backdrop>().is_err());
}

#[test]
fn opaque_pixels_ignore_backdrop() {
    let img = DualImage::new(1, 1, vec![10, 20, 30, 255]).unwrap();
    for bd in [Backdrop::White, Backdrop::Black, Backdrop::Solid([9, 9, 9])] {
        assert_eq!(flatten(&img, bd).unwrap().data(), &[10, 20, 30]);
    }
}

#[test]
fn transparent_pixels_show_backdrop() {
    let img = DualImage::new(1, 1, vec![200, 100, 50, 0]).unwrap();
    assert_eq!(flatten(&img, Backdrop::White).unwrap().data(), &[255, 255, 255]);
    assert_eq!(
        flatten(&img, Backdrop::Solid([1, 2, 3])).unwrap().data(),
        &[1, 2, 3]
    );
}

#[test]
fn composite_reads_as_each_source_on_its_backdrop() {
    let light = RasterImage::new(3, 1, vec![0, 0, 0, 128, 128, 128, 255, 255, 255]).unwrap();
    let dark = RasterImage::new(3, 1, vec![255, 255, 255, 64, 64, 64, 0, 0, 0]).unwrap();
    let out = composite(&light, &dark).unwrap();

    let on_black = flatten(&out, Backdrop::Black).unwrap();
    let on_white = flatten(&out, Backdrop::White).unwrap();
    for x in 0..3 {
        let l = light.pixel(x, 0).unwrap();
        let d = dark.pixel(x, 0).unwrap();
        let b = on_black.pixel(x, 0).unwrap();
        let w = on_white.pixel(x, 0).unwrap();
        for c in 0..3 {
            assert!((f64::from(b[c]) - dark_tone(d[c])).abs() <= 1.5, "x={x} c={c}");
            assert!((f64::from(w[c]) - light_tone(l[c])).abs() <= 2.0, "x={x} c={c}");
        }
    }
}
