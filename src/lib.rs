//! Workspace facade used by the integration tests under `tests/`.

pub use gwt_runner_core::*;
