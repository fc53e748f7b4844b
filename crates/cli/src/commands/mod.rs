pub mod deps;
pub mod init;
pub mod show_config;
pub mod super_dev;

pub use deps::deps_command;
pub use init::init_command;
pub use show_config::config_command;
pub use super_dev::super_dev_command;
