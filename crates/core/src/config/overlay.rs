//! Per-invocation settings derived from the project-wide configuration.
//!
//! Resolution order for every code server option: invocation override, then
//! the project config, then the layout default (only a few options have one).

use super::{Config, ProjectLayout, SuperDevOptions};
use crate::command::DevServerSettings;
use crate::log_level::LogLevel;

impl DevServerSettings {
    pub fn resolve(config: &Config, overrides: &SuperDevOptions, layout: &ProjectLayout) -> Self {
        let mut options = config.super_dev.clone().unwrap_or_default();
        options.merge(overrides.clone());

        let work_dir = options
            .work_dir
            .or_else(|| config.work_dir.clone())
            .map(|dir| layout.resolve(&dir))
            .unwrap_or_else(|| layout.work_dir());

        let src = match &config.src {
            Some(dirs) => dirs.iter().map(|dir| layout.resolve(dir)).collect(),
            None => layout.source_dirs(),
        };

        let log_level = options
            .log_level
            .or(config.log_level)
            .unwrap_or_else(LogLevel::from_host);

        Self {
            src: Some(src),
            use_classpath_for_src: options.use_classpath_for_src,
            work_dir: Some(work_dir),
            bind_address: options.bind_address,
            port: options.port,
            no_precompile: options.no_precompile,
            allow_missing_src: options.allow_missing_src,
            fail_on_error: options.fail_on_error,
            compile_test: options.compile_test,
            compile_test_recompiles: options.compile_test_recompiles,
            launcher_dir: options.launcher_dir.map(|dir| layout.resolve(&dir)),
            log_level: Some(log_level),
            closure_formatted_output: options.closure_formatted_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_win_over_config() {
        let config = Config {
            super_dev: Some(SuperDevOptions {
                port: Some(9876),
                bind_address: Some("127.0.0.1".to_string()),
                compile_test: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overrides = SuperDevOptions {
            port: Some(1234),
            compile_test: Some(false),
            ..Default::default()
        };

        let settings =
            DevServerSettings::resolve(&config, &overrides, &ProjectLayout::new("/project"));
        assert_eq!(settings.port, Some(1234));
        assert_eq!(settings.bind_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(settings.compile_test, Some(false));
        assert_eq!(settings.fail_on_error, None);
        assert_eq!(settings.launcher_dir, None);
    }

    #[test]
    fn test_layout_defaults() {
        let layout = ProjectLayout::new("/project");
        let settings =
            DevServerSettings::resolve(&Config::default(), &SuperDevOptions::default(), &layout);

        assert_eq!(settings.work_dir, Some(layout.work_dir()));
        assert_eq!(settings.src, Some(layout.source_dirs()));
        assert!(settings.log_level.is_some());
    }

    #[test]
    fn test_config_paths_are_project_relative() {
        let config = Config {
            work_dir: Some(PathBuf::from("tmp/work")),
            src: Some(vec![PathBuf::from("src/gwt")]),
            log_level: Some(LogLevel::Spam),
            ..Default::default()
        };
        let overrides = SuperDevOptions {
            launcher_dir: Some(PathBuf::from("war")),
            ..Default::default()
        };

        let settings =
            DevServerSettings::resolve(&config, &overrides, &ProjectLayout::new("/project"));
        assert_eq!(settings.work_dir, Some(PathBuf::from("/project/tmp/work")));
        assert_eq!(settings.src, Some(vec![PathBuf::from("/project/src/gwt")]));
        assert_eq!(settings.launcher_dir, Some(PathBuf::from("/project/war")));
        assert_eq!(settings.log_level, Some(LogLevel::Spam));
    }
}
