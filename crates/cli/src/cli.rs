use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gwt_runner_core::{LogLevel, SuperDevOptions};
use std::path::PathBuf;

use crate::commands::{config_command, deps_command, init_command, super_dev_command};

#[derive(Parser, Debug)]
#[command(name = "gwt-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    PROJECT_ROOT      Directory holding a shared root configuration")]
pub struct Runner {
    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .gwt-runner.json configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,

        /// GWT version to record in the configuration
        #[arg(long)]
        gwt_version: Option<String>,

        /// GWT module to serve (repeatable)
        #[arg(short, long = "module")]
        modules: Vec<String>,
    },
    /// Show the toolchain artifacts required by the configured GWT version
    Deps {
        /// Fail on an unparsable GWT version instead of warning
        #[arg(long)]
        strict: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the merged configuration
    Config,
    /// Run the GWT super dev mode code server
    #[command(visible_alias = "sdm")]
    SuperDev {
        #[command(flatten)]
        overrides: SuperDevArgs,

        /// Fail on an unparsable GWT version instead of warning
        #[arg(long)]
        strict: bool,

        /// Print the command without executing it (the work directory is still created)
        #[arg(short, long)]
        dry_run: bool,
    },
}

/// Per-invocation code server options; anything left out falls back to the config
#[derive(Args, Debug, Default)]
pub struct SuperDevArgs {
    #[arg(long)]
    pub bind_address: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    #[arg(long)]
    pub launcher_dir: Option<PathBuf>,

    /// Skip the initial compile
    #[arg(long)]
    pub no_precompile: bool,

    /// Put source directories on the classpath instead of passing -src
    #[arg(long)]
    pub use_classpath_for_src: bool,

    #[arg(long, value_name = "BOOL")]
    pub allow_missing_src: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub fail_on_error: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub compile_test: Option<bool>,

    #[arg(long, value_name = "N")]
    pub compile_test_recompiles: Option<u32>,

    #[arg(long, value_name = "BOOL")]
    pub closure_formatted_output: Option<bool>,

    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl From<SuperDevArgs> for SuperDevOptions {
    fn from(args: SuperDevArgs) -> Self {
        // Plain switches can only turn an option on, never force it off
        let switch = |on: bool| on.then_some(true);

        SuperDevOptions {
            work_dir: args.work_dir,
            bind_address: args.bind_address,
            port: args.port,
            no_precompile: switch(args.no_precompile),
            use_classpath_for_src: switch(args.use_classpath_for_src),
            allow_missing_src: args.allow_missing_src,
            fail_on_error: args.fail_on_error,
            compile_test: args.compile_test,
            compile_test_recompiles: args.compile_test_recompiles,
            launcher_dir: args.launcher_dir,
            log_level: args.log_level,
            closure_formatted_output: args.closure_formatted_output,
        }
    }
}

impl Runner {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let cwd = self.cwd.as_deref();

        match self.command {
            Commands::Init {
                force,
                gwt_version,
                modules,
            } => init_command(cwd, force, gwt_version, modules),
            Commands::Deps { strict, json } => deps_command(cwd, strict, json),
            Commands::Config => config_command(cwd),
            Commands::SuperDev {
                overrides,
                strict,
                dry_run,
            } => super_dev_command(cwd, overrides.into(), strict, dry_run),
        }
    }
}
