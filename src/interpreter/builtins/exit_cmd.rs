//! exit - End the session

use crate::interpreter::helpers::success;
use crate::interpreter::types::{ExecResult, InterpreterState};

/// Handle the exit builtin command.
///
/// Clears the session's running flag; the host loop owns the actual
/// termination and polls the flag after every command.
pub fn handle_exit(state: &mut InterpreterState, _args: &[String]) -> ExecResult {
    state.running = false;
    success("exit\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_clears_running_flag() {
        let mut state = InterpreterState::default();
        assert!(state.running);
        let result = handle_exit(&mut state, &[]);
        assert!(!state.running);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "exit\n");
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let mut state = InterpreterState::default();
        let result = handle_exit(&mut state, &["now".to_string()]);
        assert!(!state.running);
        assert_eq!(result.exit_code, 0);
    }
}
