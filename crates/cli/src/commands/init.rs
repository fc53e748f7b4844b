use anyhow::{Context, Result};
use gwt_runner_core::config::CONFIG_FILE_NAMES;
use std::path::Path;
use tracing::info;

use crate::config::create_default_config;
use crate::utils::project::working_dir;

pub fn init_command(
    cwd: Option<&Path>,
    force: bool,
    gwt_version: Option<String>,
    modules: Vec<String>,
) -> Result<()> {
    let project_root = working_dir(cwd)?;
    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    println!("🚀 Initializing gwt-runner in: {}", project_root.display());

    let config = create_default_config(gwt_version, modules);
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    if config.modules.is_none() {
        println!("\n📌 Add the GWT modules to serve to the 'modules' list");
    }
    if config.gwt_version.is_none() {
        println!("📌 Set 'gwt_version' to resolve the GWT toolchain artifacts");
    }

    Ok(())
}
