use crate::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options of the super dev mode code server.
///
/// Used both for the project-wide defaults and for per-invocation overrides;
/// every field stays unset unless somebody configures it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SuperDevOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_precompile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_classpath_for_src: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_missing_src: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_test_recompiles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launcher_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_formatted_output: Option<bool>,
}

impl SuperDevOptions {
    /// Layer `other` on top of `self`: every value set in `other` wins.
    pub fn merge(&mut self, other: SuperDevOptions) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            work_dir,
            bind_address,
            port,
            no_precompile,
            use_classpath_for_src,
            allow_missing_src,
            fail_on_error,
            compile_test,
            compile_test_recompiles,
            launcher_dir,
            log_level,
            closure_formatted_output,
        );
    }
}
