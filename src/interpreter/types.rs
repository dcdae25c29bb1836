//! Interpreter Types
//!
//! Type definitions for the command interpreter's per-session state and
//! command results.

/// Result of executing one command.
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    pub fn ok() -> Self {
        Self::new(String::new(), String::new(), 0)
    }
}

/// Mutable session state threaded through every command handler.
///
/// There is exactly one of these per session; nothing here is global.
#[derive(Debug, Clone)]
pub struct InterpreterState {
    /// Current working directory, always absolute and normalized.
    pub cwd: String,
    /// Cleared by the `exit` builtin; the host loop polls it.
    pub running: bool,
    /// Exit code of the most recently executed command.
    pub last_exit_code: i32,
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self {
            cwd: "/".to_string(),
            running: true,
            last_exit_code: 0,
        }
    }
}
