use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// A `java` process invocation for one of the GWT tools
#[derive(Debug, Clone, PartialEq)]
pub struct JavaCommand {
    pub program: String,
    pub jvm_args: Vec<String>,
    pub classpath: Vec<PathBuf>,
    pub main_class: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl JavaCommand {
    pub fn new(main_class: impl Into<String>) -> Self {
        Self {
            program: "java".to_string(),
            jvm_args: Vec::new(),
            classpath: Vec::new(),
            main_class: main_class.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_jvm_arg(mut self, arg: impl Into<String>) -> Self {
        self.jvm_args.push(arg.into());
        self
    }

    pub fn with_classpath(mut self, entries: impl IntoIterator<Item = PathBuf>) -> Self {
        self.classpath.extend(entries);
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// The classpath joined with the platform separator
    pub fn classpath_string(&self) -> io::Result<OsString> {
        std::env::join_paths(&self.classpath)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    /// Everything after the program name
    pub fn to_args(&self) -> io::Result<Vec<OsString>> {
        let mut args: Vec<OsString> = self.jvm_args.iter().map(OsString::from).collect();
        if !self.classpath.is_empty() {
            args.push("-cp".into());
            args.push(self.classpath_string()?);
        }
        args.push(self.main_class.clone().into());
        args.extend(self.args.iter().map(OsString::from));
        Ok(args)
    }

    /// The command as a copy-pasteable shell line
    pub fn to_shell_command(&self) -> io::Result<String> {
        let mut cmd = shell_quote(&self.program);
        for arg in self.to_args()? {
            cmd.push(' ');
            cmd.push_str(&shell_quote(&arg.to_string_lossy()));
        }
        Ok(cmd)
    }

    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.to_args()?);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        cmd.status()
    }
}

fn shell_quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
