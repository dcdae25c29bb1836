//! Interpreter module
//!
//! The command-execution layer: per-session state, builtin handlers, and the
//! closed dispatch table over the supported command names.

pub mod builtins;
pub mod dispatch;
pub mod helpers;
pub mod types;

pub use dispatch::dispatch_builtin;
pub use types::{ExecResult, InterpreterState};
