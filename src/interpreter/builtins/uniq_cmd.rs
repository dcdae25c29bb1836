//! uniq - Collapse adjacent duplicate lines
//!
//! Classic uniq semantics: only runs of *adjacent* identical lines collapse
//! to one; a line reappearing later survives. Lines are compared including
//! their terminator, so a final unterminated line never merges with a
//! terminated twin.

use crate::interpreter::helpers::{failure, success};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::{resolve_path, VirtualFilesystem};

/// Handle the uniq builtin command.
pub fn handle_uniq(
    state: &InterpreterState,
    vfs: &VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    if args.is_empty() {
        return failure("uniq: missing operand\n");
    }
    let target = &args[0];
    let path = resolve_path(target, &state.cwd);

    if !vfs.is_file(&path) {
        if vfs.get(&path).is_none() {
            return failure(format!("uniq: {}: No such file or directory\n", target));
        }
        return failure(format!("uniq: {}: Is a directory\n", target));
    }

    let text = match vfs.read_file(&path) {
        Ok(text) => text,
        Err(e) => return failure(format!("uniq: {}: {}\n", target, e)),
    };

    let mut output = String::with_capacity(text.len());
    let mut previous: Option<&str> = None;
    for line in text.split_inclusive('\n') {
        if previous != Some(line) {
            output.push_str(line);
            previous = Some(line);
        }
    }
    success(output)
}
