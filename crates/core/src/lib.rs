//! gwt-runner - Launch the GWT toolchain from a project configuration
//!
//! This crate provides functionality to:
//! - Load and layer project configuration for GWT tasks
//! - Parse GWT versions and derive the toolchain artifacts they need
//! - Build the command line for the super dev mode code server
pub mod command;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod log_level;
pub mod version;

// Re-export commonly used types
pub use command::{ArgumentBuilder, DevServerSettings, JavaCommand, SuperDevCommand};
pub use config::{Config, ConfigMerger, ProjectLayout, SuperDevOptions};
pub use dependencies::{Dependency, DependencyPlan, DependencyScope, VersionPolicy, VersionState};
pub use error::{Error, Result, VersionParseError};
pub use log_level::LogLevel;
pub use version::GwtVersion;
