//! Test support utilities shared across the workspace.

pub mod test_logging;
