//! ls - List directory contents
//!
//! With no argument lists the current directory. A file argument prints the
//! file's base name; a directory argument prints its children sorted and
//! joined by two spaces.

use crate::interpreter::helpers::{failure, success};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::{base_name, resolve_path, VirtualFilesystem};

/// Handle the ls builtin command.
pub fn handle_ls(
    state: &InterpreterState,
    vfs: &VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    let target = args.first().map(String::as_str).unwrap_or(&state.cwd);
    let path = resolve_path(target, &state.cwd);

    if vfs.get(&path).is_none() {
        return failure(format!(
            "ls: cannot access '{}': No such file or directory\n",
            path
        ));
    }
    if vfs.is_file(&path) {
        return success(format!("{}\n", base_name(&path)));
    }

    let mut names = vfs.list_children(&path);
    names.sort();
    success(format!("{}\n", names.join("  ")))
}
