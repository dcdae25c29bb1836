//! Shell Session
//!
//! Main entry point for the shell emulator. Ties one virtual filesystem to
//! one interpreter state, parses raw input lines, and formats the prompt the
//! host loop displays.

use crate::interpreter::{dispatch_builtin, ExecResult, InterpreterState};
use crate::vfs::{resolve_path, VirtualFilesystem};

/// Options for creating a shell session.
#[derive(Default)]
pub struct ShellOptions {
    /// Name shown in the prompt
    pub name: Option<String>,
    /// Initial working directory; ignored unless it names an existing
    /// directory in the filesystem
    pub cwd: Option<String>,
}

/// One interactive session over one virtual filesystem.
pub struct Shell {
    vfs: VirtualFilesystem,
    state: InterpreterState,
    name: String,
}

impl Shell {
    /// Create a new session.
    pub fn new(vfs: VirtualFilesystem, options: ShellOptions) -> Self {
        let mut state = InterpreterState::default();
        if let Some(cwd) = options.cwd {
            let resolved = resolve_path(&cwd, "/");
            if vfs.is_directory(&resolved) {
                state.cwd = resolved;
            }
        }
        Self {
            vfs,
            state,
            name: options.name.unwrap_or_else(|| "memsh".to_string()),
        }
    }

    /// Execute one already-split command.
    pub fn execute(&mut self, command: &str, args: &[String]) -> ExecResult {
        let result = dispatch_builtin(&mut self.state, &mut self.vfs, command, args);
        self.state.last_exit_code = result.exit_code;
        result
    }

    /// Parse and execute one raw input line. Blank input is a silent no-op.
    pub fn exec_line(&mut self, line: &str) -> ExecResult {
        match parse_line(line) {
            Some((command, args)) => self.execute(&command, &args),
            None => ExecResult::ok(),
        }
    }

    /// Whether the session is still accepting commands.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    /// Exit code of the most recently executed command.
    pub fn last_exit_code(&self) -> i32 {
        self.state.last_exit_code
    }

    /// Prompt string the host loop prints before reading input.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.name, self.state.cwd)
    }

    /// The session's filesystem.
    pub fn vfs(&self) -> &VirtualFilesystem {
        &self.vfs
    }
}

/// Split an input line into a command name and its arguments.
/// Returns None for blank input.
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace().map(String::from);
    let command = parts.next()?;
    Some((command, parts.collect()))
}

// ============================================================================
// Tests
// ============================================================================
