use super::*;

fn img(w: u32, h: u32) -> RasterImage {
    RasterImage::filled(w, h, [128, 128, 128]).unwrap()
}

#[test]
fn light_basis_takes_light_size() {
    let r = resolve(&img(40, 30), &img(10, 20), SizeBasis::Light, ScalePolicy::Fit).unwrap();
    assert_eq!((r.width, r.height), (40, 30));
    assert_eq!(r.light_policy, ScalePolicy::Stretch);
    assert_eq!(r.dark_policy, ScalePolicy::Fit);
}

#[test]
fn dark_basis_swaps_roles() {
    let r = resolve(&img(40, 30), &img(10, 20), SizeBasis::Dark, ScalePolicy::Fit).unwrap();
    assert_eq!((r.width, r.height), (10, 20));
    assert_eq!(r.light_policy, ScalePolicy::Fit);
    assert_eq!(r.dark_policy, ScalePolicy::Stretch);
}

#[test]
fn equal_sizes_raise_no_advisory() {
    let r = resolve(&img(8, 8), &img(8, 8), SizeBasis::Light, ScalePolicy::Stretch).unwrap();
    assert!(r.mismatch.is_none());
}

#[test]
fn differing_sizes_raise_advisory_naming_basis_and_output() {
    let r = resolve(&img(8, 6), &img(4, 4), SizeBasis::Dark, ScalePolicy::Stretch).unwrap();
    let m = r.mismatch.unwrap();
    assert_eq!(m.basis, SizeBasis::Dark);
    assert_eq!(m.light, (8, 6));
    assert_eq!(m.dark, (4, 4));
    assert_eq!(m.output, (4, 4));

    let msg = m.to_string();
    assert!(msg.contains("dark"));
    assert!(msg.contains("4x4"));
}

#[test]
fn zero_area_inputs_are_rejected() {
    let empty = RasterImage::new(0, 3, Vec::new()).unwrap();
    let err = resolve(&empty, &img(2, 2), SizeBasis::Light, ScalePolicy::Stretch).unwrap_err();
    assert!(matches!(err, MirageError::InvalidInput(_)));

    let err = resolve(&img(2, 2), &empty, SizeBasis::Light, ScalePolicy::Stretch).unwrap_err();
    assert!(err.to_string().contains("dark source"));
}
