//! GWT tool invocation and argument generation

pub mod args;
pub mod java_command;
pub mod super_dev;

// Re-export commonly used types
pub use args::{ArgumentBuilder, DevServerSettings};
pub use java_command::JavaCommand;
pub use super_dev::{CODE_SERVER_MAIN_CLASS, SuperDevCommand};
