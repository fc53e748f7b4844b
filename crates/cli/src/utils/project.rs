use anyhow::{Context, Result};
use gwt_runner_core::{Config, ConfigMerger, ProjectLayout, config::ConfigInfo};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A project directory together with its merged configuration
pub struct Project {
    pub config: Config,
    pub layout: ProjectLayout,
    pub info: ConfigInfo,
}

pub fn working_dir(cwd: Option<&Path>) -> Result<PathBuf> {
    let dir = match cwd {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    dir.canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", dir.display()))
}

/// Load the configuration layers for `cwd`.
///
/// The project directory is the one holding the project config file, or the
/// working directory when there is none.
pub fn load_project(cwd: Option<&Path>) -> Result<Project> {
    let dir = working_dir(cwd)?;

    let mut merger = ConfigMerger::new();
    merger
        .load_configs_for_path(&dir)
        .context("Failed to load gwt-runner configuration")?;

    let info = merger.get_config_info().clone();
    let project_dir = info
        .project_config_path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(dir);
    debug!("Project directory: {}", project_dir.display());

    Ok(Project {
        config: merger.get_merged_config(),
        layout: ProjectLayout::new(project_dir),
        info,
    })
}
