//! vfs-save - Serialize the filesystem back to a CSV image
//!
//! The destination is a path on the host disk, taken verbatim. A failed
//! write is captured and reported as the command's single error line; it
//! never tears down the session.

use crate::interpreter::helpers::{failure, success};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::VirtualFilesystem;

/// Handle the vfs-save builtin command.
pub fn handle_vfs_save(
    _state: &InterpreterState,
    vfs: &VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    if args.is_empty() {
        return failure("vfs-save: missing operand\n");
    }
    match vfs.save(&args[0]) {
        Ok(()) => success(format!("saved vfs image to '{}'\n", args[0])),
        Err(e) => failure(format!("vfs-save: {}\n", e)),
    }
}
