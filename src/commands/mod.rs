//! Tauri Command Handlers
//!
//! Thin IPC wrappers over the repositories. Only compiled with the
//! `app` feature.

mod task_cmd;
mod window_cmd;

pub use task_cmd::*;
pub use window_cmd::*;
