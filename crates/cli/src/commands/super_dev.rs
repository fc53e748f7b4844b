use anyhow::{Context, Result, bail};
use gwt_runner_core::{DependencyPlan, SuperDevCommand, SuperDevOptions};
use std::path::Path;
use tracing::{debug, info};

use super::deps::version_policy;
use crate::display::print_command_breakdown;
use crate::utils::load_project;

pub fn super_dev_command(
    cwd: Option<&Path>,
    overrides: SuperDevOptions,
    strict: bool,
    dry_run: bool,
) -> Result<()> {
    let project = load_project(cwd)?;

    let plan = DependencyPlan::resolve(&project.config, version_policy(strict))?;
    if !plan.super_dev_available {
        bail!("Super dev mode needs GWT 2.5 or newer with `codeserver` enabled");
    }
    debug!("Dependency plan: {:?}", plan.dependencies);

    let command = SuperDevCommand::new(&project.config, &project.layout)
        .with_overrides(overrides)
        .build()
        .context("Failed to build the code server command")?;

    let shell_cmd = command
        .to_shell_command()
        .context("Failed to render the code server command")?;
    if dry_run {
        println!("{}", shell_cmd);
        print_command_breakdown(&command);
        return Ok(());
    }

    info!("Running: {}", shell_cmd);
    let status = command
        .execute()
        .with_context(|| format!("Failed to execute: {}", shell_cmd))?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
