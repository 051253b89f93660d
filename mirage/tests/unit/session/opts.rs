use super::*;

#[test]
fn defaults_match_documented_values() {
    let opts = DualOpts::default();
    assert_eq!(opts.size_basis, SizeBasis::Light);
    assert_eq!(opts.scale_policy, ScalePolicy::Stretch);
    assert_eq!(opts.filter, ResampleFilter::Bilinear);
    assert!(opts.parallel);
    assert_eq!(opts.threads, None);
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("Dark".parse::<SizeBasis>().unwrap(), SizeBasis::Dark);
    assert_eq!(" fit ".parse::<ScalePolicy>().unwrap(), ScalePolicy::Fit);
    assert_eq!(
        "NEAREST".parse::<ResampleFilter>().unwrap(),
        ResampleFilter::Nearest
    );
    assert!("medium".parse::<SizeBasis>().is_err());
    assert!("crop".parse::<ScalePolicy>().is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for basis in [SizeBasis::Light, SizeBasis::Dark] {
        assert_eq!(basis.to_string().parse::<SizeBasis>().unwrap(), basis);
    }
    for policy in [ScalePolicy::Stretch, ScalePolicy::Fit] {
        assert_eq!(policy.to_string().parse::<ScalePolicy>().unwrap(), policy);
    }
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let opts = DualOpts::from_json_str(r#"{ "size_basis": "dark", "scale_policy": "fit" }"#).unwrap();
    assert_eq!(opts.size_basis, SizeBasis::Dark);
    assert_eq!(opts.scale_policy, ScalePolicy::Fit);
    assert_eq!(opts.filter, ResampleFilter::Bilinear);
    assert!(opts.parallel);
}

#[test]
fn json_rejects_unknown_fields_and_zero_threads() {
    let err = DualOpts::from_json_str(r#"{ "sizeBasis": "dark" }"#).unwrap_err();
    assert!(matches!(err, MirageError::InvalidInput(_)));

    let err = DualOpts::from_json_str(r#"{ "threads": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn from_path_reads_json_file() {
    let dir = std::path::PathBuf::from("target").join("opts_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("opts.json");
    std::fs::write(&path, r#"{ "filter": "nearest", "parallel": false, "threads": 2 }"#).unwrap();

    let opts = DualOpts::from_path(&path).unwrap();
    assert_eq!(opts.filter, ResampleFilter::Nearest);
    assert!(!opts.parallel);
    assert_eq!(opts.threads, Some(2));

    assert!(DualOpts::from_path(dir.join("missing.json")).is_err());
}
