//! Integration test for config merging functionality

use gwt_runner_core::config::ConfigMerger;
use gwt_runner_core::{DevServerSettings, ProjectLayout, SuperDevOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_hierarchy_merging() {
    let temp_dir = TempDir::new().unwrap();
    let root_dir = temp_dir.path();
    let project_dir = root_dir.join("apps").join("web");
    let src_dir = project_dir.join("src").join("main").join("java");
    fs::create_dir_all(&src_dir).unwrap();

    let root_config = serde_json::json!({
        "gwt_version": "2.7.0",
        "classpath": ["/opt/gwt/gwt-dev.jar", "/opt/gwt/gwt-user.jar"],
        "max_heap_size": "512m",
        "log_level": "WARN",
        "super_dev": {
            "bind_address": "0.0.0.0",
            "port": 9876,
            "fail_on_error": true
        }
    });
    fs::write(
        root_dir.join(".gwt-runner.json"),
        serde_json::to_string_pretty(&root_config).unwrap(),
    )
    .unwrap();

    let project_config = serde_json::json!({
        "gwt_version": "2.8.2",
        "modules": ["com.example.Web"],
        "classpath": ["/opt/gwt/gwt-user.jar", "lib/extra.jar"],
        "super_dev": {
            "port": 9877,
            "compile_test": false
        }
    });
    fs::write(
        project_dir.join(".gwt-runner.json"),
        serde_json::to_string_pretty(&project_config).unwrap(),
    )
    .unwrap();

    // Set PROJECT_ROOT
    unsafe {
        std::env::set_var("PROJECT_ROOT", root_dir);
    }

    let mut merger = ConfigMerger::new();
    merger.load_configs_for_path(&src_dir).unwrap();
    let merged = merger.get_merged_config();

    let info = merger.get_config_info();
    assert_eq!(
        info.project_config_path,
        Some(project_dir.join(".gwt-runner.json"))
    );
    assert_eq!(info.root_config_path, Some(root_dir.join(".gwt-runner.json")));

    assert_eq!(merged.gwt_version.as_deref(), Some("2.8.2")); // From project
    assert_eq!(merged.max_heap_size.as_deref(), Some("512m")); // From root
    assert_eq!(merged.modules, Some(vec!["com.example.Web".to_string()]));

    // Classpath entries accumulate without duplicates
    assert_eq!(
        merged.classpath,
        Some(vec![
            PathBuf::from("/opt/gwt/gwt-dev.jar"),
            PathBuf::from("/opt/gwt/gwt-user.jar"),
            PathBuf::from("lib/extra.jar"),
        ])
    );

    let super_dev = merged.super_dev.clone().unwrap();
    assert_eq!(super_dev.port, Some(9877));
    assert_eq!(super_dev.bind_address.as_deref(), Some("0.0.0.0"));
    assert_eq!(super_dev.fail_on_error, Some(true));
    assert_eq!(super_dev.compile_test, Some(false));

    // Invocation overrides sit on top of every config layer
    let overrides = SuperDevOptions {
        port: Some(1234),
        ..Default::default()
    };
    let settings =
        DevServerSettings::resolve(&merged, &overrides, &ProjectLayout::new(&project_dir));
    assert_eq!(settings.port, Some(1234));
    assert_eq!(settings.bind_address.as_deref(), Some("0.0.0.0"));
    assert_eq!(settings.compile_test, Some(false));

    unsafe {
        std::env::remove_var("PROJECT_ROOT");
    }
}
