//! Virtual Filesystem Module
//!
//! Provides the in-memory, path-keyed filesystem that the interpreter runs
//! against. The whole tree is materialized from a CSV image at startup and
//! can be serialized back on demand; nothing ever touches the real disk
//! except the image itself.

pub mod memory_vfs;
pub mod types;

pub use memory_vfs::{base_name, parent_dir, resolve_path, scrub_path, VirtualFilesystem};
pub use types::*;
