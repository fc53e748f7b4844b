use gwt_runner_core::{Config, LogLevel, SuperDevOptions};

/// Starting configuration written by `gwt-runner init`
pub fn create_default_config(gwt_version: Option<String>, modules: Vec<String>) -> Config {
    Config {
        gwt_version,
        modules: if modules.is_empty() { None } else { Some(modules) },
        log_level: Some(LogLevel::Info),
        super_dev: Some(SuperDevOptions {
            bind_address: Some("127.0.0.1".to_string()),
            port: Some(9876),
            ..Default::default()
        }),
        ..Default::default()
    }
}
