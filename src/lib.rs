//! memsh - A shell emulator over an in-memory virtual filesystem
//!
//! The filesystem is materialized from a CSV image (`path,type,content` rows
//! with base64 payloads) and lives entirely in memory; a small closed set of
//! builtin commands is interpreted against it. The library exposes the
//! filesystem, the interpreter, and a session facade; the binary adds the
//! REPL and script-running host loop.

pub mod interpreter;
pub mod shell;
pub mod vfs;

pub use shell::{Shell, ShellOptions};
pub use vfs::{VfsEntry, VfsError, VirtualFilesystem};
