//! End-to-end checks of version gating and code server argument assembly

use gwt_runner_suite::{ArgumentBuilder, DevServerSettings, GwtVersion};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_version_gating() {
    assert!(GwtVersion::parse("").unwrap().is_none());
    assert!(GwtVersion::parse_optional(None).unwrap().is_none());

    let version = GwtVersion::parse("2.5.0").unwrap().unwrap();
    assert!(version.is_at_least(2, 5));
    assert!(!version.is_at_least(2, 6));
    assert!(!version.is_at_least(3, 0));

    assert!(GwtVersion::parse("abc.5.0").is_err());
    assert!(GwtVersion::parse("2").is_err());
}

#[test]
fn test_src_and_work_dir_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("src").join("main").join("java");
    fs::create_dir_all(&existing).unwrap();
    let missing = temp_dir.path().join("src").join("main").join("resources");
    let work_dir = temp_dir.path().join("build").join("gwt").join("work");

    let settings = DevServerSettings {
        src: Some(vec![existing.clone(), missing]),
        work_dir: Some(work_dir.clone()),
        allow_missing_src: Some(false),
        ..Default::default()
    };

    let first = ArgumentBuilder::build(&settings);
    assert!(work_dir.is_dir());
    assert_eq!(
        first,
        vec![
            "-src".to_string(),
            existing.display().to_string(),
            "-workDir".to_string(),
            work_dir.display().to_string(),
            "-noallowMissingSrc".to_string(),
        ]
    );

    // the work dir now exists; the arguments must not change
    let second = ArgumentBuilder::build(&settings);
    assert_eq!(first, second);
}
