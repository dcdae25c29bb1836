//! ExecResult factory functions for cleaner code.

use super::types::ExecResult;

/// A successful result with no output.
/// Use this for commands that succeed silently.
pub const OK: ExecResult = ExecResult {
    stdout: String::new(),
    stderr: String::new(),
    exit_code: 0,
};

/// Create a successful result with stdout.
pub fn success(stdout: impl Into<String>) -> ExecResult {
    ExecResult::new(stdout.into(), String::new(), 0)
}

/// Create a failure result with stderr message.
pub fn failure(stderr: impl Into<String>) -> ExecResult {
    ExecResult::new(String::new(), stderr.into(), 1)
}

/// Create a failure result with stderr message and custom exit code.
pub fn failure_with_code(stderr: impl Into<String>, exit_code: i32) -> ExecResult {
    ExecResult::new(String::new(), stderr.into(), exit_code)
}
