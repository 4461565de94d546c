mod app;
pub mod clipboard;
pub mod command;
pub mod logging;

/// Re-exports.
pub use app::{Args, RunCmd};
