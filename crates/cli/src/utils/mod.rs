pub mod project;

pub use project::{Project, load_project};
