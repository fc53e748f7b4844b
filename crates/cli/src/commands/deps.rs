use anyhow::Result;
use gwt_runner_core::{DependencyPlan, DependencyScope, VersionPolicy, VersionState};
use std::path::Path;

use crate::utils::load_project;

pub fn version_policy(strict: bool) -> VersionPolicy {
    if strict {
        VersionPolicy::Strict
    } else {
        VersionPolicy::Warn
    }
}

pub fn deps_command(cwd: Option<&Path>, strict: bool, json: bool) -> Result<()> {
    let project = load_project(cwd)?;
    let plan = DependencyPlan::resolve(&project.config, version_policy(strict))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match &plan.version {
        VersionState::Parsed(version) => println!("📦 GWT version: {}", version),
        VersionState::Unspecified => {
            println!("📦 No GWT version configured, version specific artifacts are skipped")
        }
        VersionState::Malformed(raw) => {
            println!("⚠️  GWT version '{}' is invalid, version specific artifacts are skipped", raw)
        }
    }

    for scope in [
        DependencyScope::GwtSdk,
        DependencyScope::Gwt,
        DependencyScope::Runtime,
    ] {
        let deps: Vec<String> = plan.for_scope(scope).map(|dep| dep.to_string()).collect();
        if deps.is_empty() {
            continue;
        }
        println!("   {}:", scope.as_str());
        for dep in deps {
            println!("      • {}", dep);
        }
    }

    println!(
        "   super dev mode: {}",
        if plan.super_dev_available {
            "available"
        } else {
            "unavailable"
        }
    );

    Ok(())
}
