//! Builtin Command Dispatch
//!
//! Routes a `(command, args)` pair to its handler. The command set is closed
//! and known at compile time, so dispatch is a plain match; an unrecognized
//! name produces a one-line result instead of failing the session.

use crate::vfs::VirtualFilesystem;

use super::builtins;
use super::helpers::failure_with_code;
use super::types::{ExecResult, InterpreterState};

/// Execute one command against the session state and filesystem.
pub fn dispatch_builtin(
    state: &mut InterpreterState,
    vfs: &mut VirtualFilesystem,
    command: &str,
    args: &[String],
) -> ExecResult {
    match command {
        "ls" => builtins::handle_ls(state, vfs, args),
        "cd" => builtins::handle_cd(state, vfs, args),
        "cat" => builtins::handle_cat(state, vfs, args),
        "uniq" => builtins::handle_uniq(state, vfs, args),
        "cp" => builtins::handle_cp(state, vfs, args),
        "vfs-save" => builtins::handle_vfs_save(state, vfs, args),
        "exit" => builtins::handle_exit(state, args),
        _ => failure_with_code(format!("memsh: {}: command not found\n", command), 127),
    }
}
