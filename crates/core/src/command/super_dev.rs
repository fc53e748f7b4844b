use super::{ArgumentBuilder, DevServerSettings, JavaCommand};
use crate::{
    config::{Config, ProjectLayout, SuperDevOptions},
    error::{Error, Result},
};
use std::path::PathBuf;
use tracing::debug;

pub const CODE_SERVER_MAIN_CLASS: &str = "com.google.gwt.dev.codeserver.CodeServer";

/// Builds the code server invocation for a project
pub struct SuperDevCommand<'a> {
    config: &'a Config,
    layout: &'a ProjectLayout,
    overrides: SuperDevOptions,
}

impl<'a> SuperDevCommand<'a> {
    pub fn new(config: &'a Config, layout: &'a ProjectLayout) -> Self {
        Self {
            config,
            layout,
            overrides: SuperDevOptions::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: SuperDevOptions) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn settings(&self) -> DevServerSettings {
        DevServerSettings::resolve(self.config, &self.overrides, self.layout)
    }

    pub fn build(&self) -> Result<JavaCommand> {
        let modules = self.config.dev_task_modules();
        if modules.is_empty() {
            return Err(Error::ConfigError(
                "No GWT modules configured; set `modules` or `dev_modules`".to_string(),
            ));
        }

        let settings = self.settings();
        debug!("Resolved code server settings: {:?}", settings);

        let mut command = JavaCommand::new(CODE_SERVER_MAIN_CLASS)
            .with_program(self.config.java_executable())
            .with_working_dir(self.layout.project_dir().to_path_buf());

        if let Some(ref min) = self.config.min_heap_size {
            command = command.with_jvm_arg(format!("-Xms{min}"));
        }
        if let Some(ref max) = self.config.max_heap_size {
            command = command.with_jvm_arg(format!("-Xmx{max}"));
        }

        command = command
            .with_classpath(settings.classpath_sources())
            .with_classpath(self.classpath())
            .with_args(ArgumentBuilder::build(&settings))
            .with_args(modules);

        Ok(command)
    }

    fn classpath(&self) -> Vec<PathBuf> {
        match &self.config.classpath {
            Some(entries) => entries
                .iter()
                .map(|entry| self.layout.resolve(entry))
                .collect(),
            None => self.layout.class_dirs(),
        }
    }
}
