use anyhow::Result;
use gwt_runner_core::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::utils::load_project;

#[derive(Serialize)]
struct Directories {
    work_dir: PathBuf,
    gen_dir: PathBuf,
    cache_dir: PathBuf,
    extra_dir: PathBuf,
    dev_war: PathBuf,
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    root_config: Option<&'a Path>,
    project_config: Option<&'a Path>,
    project_dir: &'a Path,
    directories: Directories,
    config: &'a Config,
}

pub fn config_command(cwd: Option<&Path>) -> Result<()> {
    let project = load_project(cwd)?;
    let config = &project.config;
    let layout = &project.layout;

    let pick = |configured: &Option<PathBuf>, default: PathBuf| match configured {
        Some(dir) => layout.resolve(dir),
        None => default,
    };

    let report = ConfigReport {
        root_config: project.info.root_config_path.as_deref(),
        project_config: project.info.project_config_path.as_deref(),
        project_dir: layout.project_dir(),
        directories: Directories {
            work_dir: pick(&config.work_dir, layout.work_dir()),
            gen_dir: pick(&config.gen_dir, layout.gen_dir()),
            cache_dir: pick(&config.cache_dir, layout.cache_dir()),
            extra_dir: pick(&config.extra_dir, layout.extra_dir()),
            dev_war: pick(&config.dev_war, layout.dev_war()),
        },
        config,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
