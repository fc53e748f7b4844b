//! Command-line arguments for the super dev mode code server

use crate::log_level::LogLevel;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fully resolved code server settings for one invocation.
///
/// Every field is optional on its own. An unset field produces no argument at
/// all; `Some(false)` on a switch produces the negative spelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevServerSettings {
    pub src: Option<Vec<PathBuf>>,
    pub use_classpath_for_src: Option<bool>,
    pub work_dir: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub no_precompile: Option<bool>,
    pub allow_missing_src: Option<bool>,
    pub fail_on_error: Option<bool>,
    pub compile_test: Option<bool>,
    pub compile_test_recompiles: Option<u32>,
    pub launcher_dir: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub closure_formatted_output: Option<bool>,
}

impl DevServerSettings {
    fn uses_classpath_for_src(&self) -> bool {
        self.use_classpath_for_src == Some(true)
    }

    fn existing_src_dirs(&self) -> impl Iterator<Item = &PathBuf> {
        self.src.iter().flatten().filter(|dir| {
            let keep = dir.is_dir();
            if !keep {
                debug!("Skipping missing source directory: {:?}", dir);
            }
            keep
        })
    }

    /// Source directories that belong on the classpath instead of `-src`.
    pub fn classpath_sources(&self) -> Vec<PathBuf> {
        if self.uses_classpath_for_src() {
            self.existing_src_dirs().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

/// Code server flags that are followed by a value
pub const VALUE_FLAGS: [&str; 7] = [
    "-src",
    "-workDir",
    "-bindAddress",
    "-port",
    "-compileTestRecompiles",
    "-launcherDir",
    "-logLevel",
];

pub fn takes_value(flag: &str) -> bool {
    VALUE_FLAGS.contains(&flag)
}

#[derive(Debug, Default)]
pub struct ArgumentBuilder {
    args: Vec<String>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the code server arguments for `settings`.
    pub fn build(settings: &DevServerSettings) -> Vec<String> {
        let mut builder = Self::new();

        if !settings.uses_classpath_for_src() {
            for dir in settings.existing_src_dirs() {
                builder.path_arg_if_set("-src", Some(dir));
            }
        }
        builder.dir_arg_if_set("-workDir", settings.work_dir.as_deref());
        builder.arg_if_set("-bindAddress", settings.bind_address.as_ref());
        builder.arg_if_set("-port", settings.port);
        builder.arg_if_enabled(settings.no_precompile, "-noprecompile");
        builder.arg_on_off(
            settings.allow_missing_src,
            "-allowMissingSrc",
            "-noallowMissingSrc",
        );
        builder.arg_on_off(settings.fail_on_error, "-failOnError", "-nofailOnError");
        builder.arg_on_off(settings.compile_test, "-compileTest", "-nocompileTest");
        builder.arg_on_off(
            settings.closure_formatted_output,
            "-XclosureFormattedOutput",
            "-XnoclosureFormattedOutput",
        );
        builder.arg_if_set("-compileTestRecompiles", settings.compile_test_recompiles);
        builder.path_arg_if_set("-launcherDir", settings.launcher_dir.as_deref());
        builder.arg_if_set("-logLevel", settings.log_level);

        builder.finish()
    }

    pub fn arg_if_set<T: Display>(&mut self, flag: &str, value: Option<T>) {
        if let Some(value) = value {
            self.args.push(flag.to_string());
            self.args.push(value.to_string());
        }
    }

    /// Paths that are not valid UTF-8 are skipped rather than mangled.
    pub fn path_arg_if_set(&mut self, flag: &str, path: Option<&Path>) {
        let Some(path) = path else {
            return;
        };
        match path.to_str() {
            Some(value) => self.arg_if_set(flag, Some(value)),
            None => warn!("Skipping {} {}: path is not valid UTF-8", flag, path.display()),
        }
    }

    /// Like [`ArgumentBuilder::path_arg_if_set`], creating the directory first.
    pub fn dir_arg_if_set(&mut self, flag: &str, dir: Option<&Path>) {
        if let Some(dir) = dir {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!("Failed to create {}: {}", dir.display(), e);
            }
            self.path_arg_if_set(flag, Some(dir));
        }
    }

    pub fn arg_if_enabled(&mut self, value: Option<bool>, flag: &str) {
        if value == Some(true) {
            self.args.push(flag.to_string());
        }
    }

    /// `on` when set to true, `off` when set to false, nothing when unset.
    pub fn arg_on_off(&mut self, value: Option<bool>, on: &str, off: &str) {
        match value {
            Some(true) => self.args.push(on.to_string()),
            Some(false) => self.args.push(off.to_string()),
            None => {}
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.args
    }
}
