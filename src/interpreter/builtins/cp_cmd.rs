//! cp - Copy a file inside the virtual filesystem
//!
//! The source must be a file. Copying onto an existing directory appends the
//! source's base name; the real target's parent must already exist. Every
//! precondition is checked before the mapping is touched, so a failing cp
//! never mutates anything.

use crate::interpreter::helpers::{failure, success};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::{base_name, parent_dir, resolve_path, VfsEntry, VirtualFilesystem};

/// Handle the cp builtin command.
pub fn handle_cp(
    state: &InterpreterState,
    vfs: &mut VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    if args.len() < 2 {
        return failure("cp: missing file operand\n");
    }
    let src = resolve_path(&args[0], &state.cwd);
    let mut dst = resolve_path(&args[1], &state.cwd);

    // The stored transport text is copied as-is; no decode round trip.
    let content = match vfs.get(&src) {
        Some(VfsEntry::File { content }) => content.clone(),
        Some(VfsEntry::Directory) => {
            return failure(format!(
                "cp: -r not specified; omitting directory '{}'\n",
                args[0]
            ));
        }
        None => {
            return failure(format!(
                "cp: cannot stat '{}': No such file or directory\n",
                args[0]
            ));
        }
    };

    if vfs.is_directory(&dst) {
        let name = base_name(&src);
        dst = if dst == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", dst, name)
        };
    }

    let parent = parent_dir(&dst);
    if !vfs.is_directory(&parent) {
        return failure(format!(
            "cp: cannot create regular file '{}': No such file or directory\n",
            dst
        ));
    }

    vfs.put(&dst, content);
    success(format!("'{}' -> '{}'\n", src, dst))
}
