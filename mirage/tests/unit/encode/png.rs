use super::*;

fn sample() -> DualImage {
    DualImage::new(2, 1, vec![0, 0, 0, 1, 124, 124, 124, 205]).unwrap()
}

#[test]
fn png_preserves_rgba_exactly() {
    let bytes = encode_png(&sample()).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.into_raw(), sample().into_raw());
}

#[test]
fn sink_writes_file_and_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("png_sink_unit").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    let mut sink = PngSink::new(PngSinkOpts::new(&path));
    sink.consume(&sample()).unwrap();
    assert!(path.exists());
    assert_eq!(sink.out_path(), path.as_path());

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(1, 0).0, [124, 124, 124, 205]);
}

#[test]
fn sink_refuses_overwrite_when_disabled() {
    let dir = PathBuf::from("target").join("png_sink_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("existing.png");
    std::fs::write(&path, b"placeholder").unwrap();

    let mut sink = PngSink::new(PngSinkOpts {
        out_path: path.clone(),
        overwrite: false,
    });
    let err = sink.consume(&sample()).unwrap_err();
    assert!(matches!(err, MirageError::Encode(_)));
    assert_eq!(std::fs::read(&path).unwrap(), b"placeholder");
}
