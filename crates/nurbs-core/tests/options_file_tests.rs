use std::path::PathBuf;

use nurbs_core::{CurveOptions, EndpointPolicy, NurbsError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("nurbs-core-{}-{}.toml", name, std::process::id()))
}

#[test]
fn test_save_then_load() {
    let path = temp_path("save-load");
    let opts = CurveOptions::new(2, 250).with_endpoint(EndpointPolicy::Close);
    opts.save_to_file(&path).unwrap();

    let loaded = CurveOptions::load_from_file(&path);
    assert_eq!(loaded, opts);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let path = temp_path("missing");
    assert_eq!(CurveOptions::load_from_file(&path), CurveOptions::default());

    let err = CurveOptions::try_load_from_file(&path).unwrap_err();
    assert!(matches!(err, NurbsError::Io(_)));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let path = temp_path("invalid");
    std::fs::write(&path, "samples = \"many\"").unwrap();

    assert_eq!(CurveOptions::load_from_file(&path), CurveOptions::default());
    assert!(matches!(
        CurveOptions::try_load_from_file(&path),
        Err(NurbsError::Config(_))
    ));

    std::fs::remove_file(&path).unwrap();
}
