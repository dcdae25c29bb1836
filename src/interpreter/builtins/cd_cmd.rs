//! cd - Change directory builtin
//!
//! Moves the session's working-directory cursor. The cursor can only ever
//! point at an existing directory.

use crate::interpreter::helpers::{failure, OK};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::{resolve_path, VirtualFilesystem};

/// Handle the cd builtin command.
pub fn handle_cd(
    state: &mut InterpreterState,
    vfs: &VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    if args.is_empty() {
        return failure("cd: missing operand\n");
    }
    let target = &args[0];
    let path = resolve_path(target, &state.cwd);

    if vfs.get(&path).is_none() {
        return failure(format!("cd: {}: No such file or directory\n", target));
    }
    if !vfs.is_directory(&path) {
        return failure(format!("cd: {}: Not a directory\n", target));
    }

    state.cwd = path;
    OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFilesystem;

    fn sample_vfs() -> VirtualFilesystem {
        let image = "path,type,content\n/docs/sub/deep.txt,file,aGk=\n";
        VirtualFilesystem::load_from_reader(image.as_bytes()).unwrap()
    }

    #[test]
    fn test_cd_absolute() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cd(&mut state, &vfs, &["/docs/sub".to_string()]);
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.is_empty());
        assert_eq!(state.cwd, "/docs/sub");
    }

    #[test]
    fn test_cd_relative_and_dotdot() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        handle_cd(&mut state, &vfs, &["docs".to_string()]);
        assert_eq!(state.cwd, "/docs");
        handle_cd(&mut state, &vfs, &["sub".to_string()]);
        assert_eq!(state.cwd, "/docs/sub");
        handle_cd(&mut state, &vfs, &["..".to_string()]);
        assert_eq!(state.cwd, "/docs");
    }

    #[test]
    fn test_cd_dotdot_at_root_stays_at_root() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cd(&mut state, &vfs, &["..".to_string()]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(state.cwd, "/");
    }

    #[test]
    fn test_cd_missing_operand() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cd(&mut state, &vfs, &[]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "cd: missing operand\n");
        assert_eq!(state.cwd, "/");
    }

    #[test]
    fn test_cd_missing_path() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cd(&mut state, &vfs, &["/nope".to_string()]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "cd: /nope: No such file or directory\n");
        assert_eq!(state.cwd, "/");
    }

    #[test]
    fn test_cd_into_file_is_rejected() {
        let mut state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cd(&mut state, &vfs, &["/docs/sub/deep.txt".to_string()]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stderr,
            "cd: /docs/sub/deep.txt: Not a directory\n"
        );
        assert_eq!(state.cwd, "/");
    }
}
