//! cat - Print file contents
//!
//! Decodes the file's stored payload to text and returns it verbatim, with
//! no trailing newline beyond what the content itself carries.

use crate::interpreter::helpers::{failure, success};
use crate::interpreter::types::{ExecResult, InterpreterState};
use crate::vfs::{resolve_path, VirtualFilesystem};

/// Handle the cat builtin command.
pub fn handle_cat(
    state: &InterpreterState,
    vfs: &VirtualFilesystem,
    args: &[String],
) -> ExecResult {
    if args.is_empty() {
        return failure("cat: missing operand\n");
    }
    let target = &args[0];
    let path = resolve_path(target, &state.cwd);

    if !vfs.is_file(&path) {
        if vfs.get(&path).is_none() {
            return failure(format!("cat: {}: No such file or directory\n", target));
        }
        return failure(format!("cat: {}: Is a directory\n", target));
    }

    match vfs.read_file(&path) {
        Ok(text) => success(text),
        Err(e) => failure(format!("cat: {}: {}\n", target, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFilesystem;

    fn sample_vfs() -> VirtualFilesystem {
        // /docs/readme.txt holds "hello world", /docs/empty.txt is empty,
        // /docs/bad.bin holds an invalid payload
        let image = "path,type,content\n\
                     /docs/readme.txt,file,aGVsbG8gd29ybGQ=\n\
                     /docs/empty.txt,file,\n\
                     /docs/bad.bin,file,not-base64!\n";
        VirtualFilesystem::load_from_reader(image.as_bytes()).unwrap()
    }

    #[test]
    fn test_cat_file() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["/docs/readme.txt".to_string()]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "hello world");
    }

    #[test]
    fn test_cat_relative_path() {
        let mut state = InterpreterState::default();
        state.cwd = "/docs".to_string();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["readme.txt".to_string()]);
        assert_eq!(result.stdout, "hello world");
    }

    #[test]
    fn test_cat_empty_file() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["/docs/empty.txt".to_string()]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "");
    }

    #[test]
    fn test_cat_missing_operand() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &[]);
        assert_eq!(result.stderr, "cat: missing operand\n");
    }

    #[test]
    fn test_cat_missing_file() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["/nope.txt".to_string()]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stderr,
            "cat: /nope.txt: No such file or directory\n"
        );
    }

    #[test]
    fn test_cat_directory_is_rejected() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["/docs".to_string()]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "cat: /docs: Is a directory\n");
    }

    #[test]
    fn test_cat_undecodable_content() {
        let state = InterpreterState::default();
        let vfs = sample_vfs();
        let result = handle_cat(&state, &vfs, &["/docs/bad.bin".to_string()]);
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.starts_with("cat: /docs/bad.bin: "));
        assert!(result.stderr.contains("invalid base64 content"));
    }
}
