//! Configuration management for gwt-runner

pub mod layout;
pub mod merge;
mod overlay;
mod settings;
mod super_dev_options;

// Re-export main types
pub use layout::ProjectLayout;
pub use merge::{ConfigInfo, ConfigMerger};
pub use settings::{CONFIG_FILE_NAMES, Config};
pub use super_dev_options::SuperDevOptions;
