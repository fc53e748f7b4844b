pub mod command_breakdown;

pub use command_breakdown::{describe_args, print_command_breakdown};
